//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Admin e-mail.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Admin bearer key.
    #[validate(length(min = 1, message = "API key is required"))]
    pub api_key: String,
}
