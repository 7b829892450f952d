//! Trailing-window request limiting.

pub mod limiter;

pub use limiter::RateLimiter;

/// Shared key for callers whose source address is unknown.
pub const UNKNOWN_CLIENT_KEY: &str = "unknown";
