//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `GIVING__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod audit;
pub mod auth;
pub mod logging;
pub mod rate_limit;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::audit::AuditConfig;
pub use self::auth::{AdminAccount, AuthConfig};
pub use self::logging::LoggingConfig;
pub use self::rate_limit::{RateLimitConfig, RouteLimit};

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
///
/// Every section carries serde defaults, so an empty source set yields a
/// usable development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Audit event store settings.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Per-route-group request limits.
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Admin credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// (`config/{env}`) and environment variables such as
    /// `GIVING__SERVER__PORT=9000`.
    pub fn load(env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("GIVING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        tracing::debug!(env, admins = loaded.auth.admins.len(), "Configuration loaded");
        Ok(loaded)
    }

    /// Reject values that would make the audit or limiter machinery meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if self.audit.capacity == 0 {
            return Err(AppError::configuration("audit.capacity must be at least 1"));
        }
        if self.audit.default_list_limit == 0 {
            return Err(AppError::configuration(
                "audit.default_list_limit must be at least 1",
            ));
        }
        for (name, limit) in [
            ("admin", &self.rate_limit.admin),
            ("login", &self.rate_limit.login),
        ] {
            if limit.window_ms == 0 {
                return Err(AppError::configuration(format!(
                    "rate_limit.{name}.window_ms must be positive"
                )));
            }
        }
        if let Some(account) = self.auth.admins.iter().find(|a| a.api_key.is_empty()) {
            return Err(AppError::configuration(format!(
                "admin account '{}' has an empty api_key",
                account.email
            )));
        }
        Ok(())
    }
}
