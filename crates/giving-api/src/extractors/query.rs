//! List-size query parameter extractor.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `?limit=` for audit listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LimitParams {
    /// Maximum number of events to return.
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
}

impl LimitParams {
    /// Resolves the effective limit: the requested value capped at
    /// `capacity`, or `default` when absent.
    pub fn resolve(&self, default: usize, capacity: usize) -> usize {
        self.limit.unwrap_or(default).min(capacity)
    }
}
