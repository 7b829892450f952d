//! Response DTOs.

use serde::{Deserialize, Serialize};

use giving_entity::{Actor, AuditEvent};
use giving_service::AuditSummary;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned when a caller exceeds its request limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitExceededResponse {
    /// Always `"RATE_LIMIT_EXCEEDED"`.
    pub error: String,
    /// Localized explanation.
    pub message: String,
    /// Seconds to wait before retrying.
    pub retry_after: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Events currently retained by the audit store.
    pub audit_events: usize,
    /// Audit store capacity.
    pub audit_capacity: usize,
}

/// Successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated admin.
    pub actor: Actor,
}

/// Admin dashboard counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Audit store counters.
    pub audit: AuditSummary,
    /// Keys currently tracked by the admin route limiter.
    pub rate_limited_keys: usize,
    /// Keys currently tracked by the login limiter.
    pub login_attempt_keys: usize,
}

/// A page of audit events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEventsResponse {
    /// Events, most recent first.
    pub items: Vec<AuditEvent>,
    /// Number of events returned.
    pub count: usize,
    /// The limit that was applied.
    pub limit: usize,
}

impl AuditEventsResponse {
    /// Wraps a list of events.
    pub fn new(items: Vec<AuditEvent>, limit: usize) -> Self {
        Self {
            count: items.len(),
            items,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_body_shape() {
        let body = RateLimitExceededResponse {
            error: "RATE_LIMIT_EXCEEDED".into(),
            message: "slow down".into(),
            retry_after: 1,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "error": "RATE_LIMIT_EXCEEDED",
                "message": "slow down",
                "retryAfter": 1,
            })
        );
    }
}
