//! Audit store configuration.

use serde::{Deserialize, Serialize};

/// In-memory audit store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum number of events retained; the oldest are evicted first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Number of events returned by list endpoints when no `limit` is given.
    #[serde(default = "default_list_limit")]
    pub default_list_limit: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            default_list_limit: default_list_limit(),
        }
    }
}

fn default_capacity() -> usize {
    1000
}

fn default_list_limit() -> usize {
    50
}
