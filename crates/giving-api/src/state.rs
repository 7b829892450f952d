//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use giving_core::config::AppConfig;
use giving_service::{AuditStore, RateLimiter};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Audit ────────────────────────────────────────────────
    /// Bounded audit event store
    pub audit: Arc<AuditStore>,

    // ── Rate limiting ────────────────────────────────────────
    /// Limiter for authenticated admin routes
    pub admin_limiter: Arc<RateLimiter>,
    /// Limiter for admin login attempts
    pub login_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Builds fresh, empty services from configuration.
    pub fn new(config: AppConfig) -> Self {
        let audit = Arc::new(AuditStore::from_config(&config.audit));
        Self {
            config: Arc::new(config),
            audit,
            admin_limiter: Arc::new(RateLimiter::new()),
            login_limiter: Arc::new(RateLimiter::new()),
        }
    }
}
