//! Request rate-limit configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Limits applied to the admin API route groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Limit shared by authenticated admin routes.
    #[serde(default = "default_admin")]
    pub admin: RouteLimit,
    /// Limit on admin login attempts.
    #[serde(default = "default_login")]
    pub login: RouteLimit,
    /// Message returned to denied callers.
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            admin: default_admin(),
            login: default_login(),
            message: default_message(),
        }
    }
}

/// `max_requests` allowed within a trailing window of `window_ms` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLimit {
    /// Requests allowed per window.
    pub max_requests: u32,
    /// Window length in milliseconds.
    pub window_ms: u64,
}

impl RouteLimit {
    /// Creates a limit.
    pub fn new(max_requests: u32, window_ms: u64) -> Self {
        Self {
            max_requests,
            window_ms,
        }
    }

    /// Window length as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Seconds a denied caller is told to wait, rounded up.
    pub fn retry_after_seconds(&self) -> u64 {
        self.window_ms.div_ceil(1000)
    }
}

fn default_admin() -> RouteLimit {
    RouteLimit::new(100, 15 * 60 * 1000)
}

fn default_login() -> RouteLimit {
    RouteLimit::new(5, 15 * 60 * 1000)
}

fn default_message() -> String {
    "Trop de requêtes. Veuillez réessayer plus tard.".to_string()
}
