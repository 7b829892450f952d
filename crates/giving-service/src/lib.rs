//! # giving-service
//!
//! Process-local services backing the admin audit trail: the bounded
//! [`AuditStore`] and the trailing-window [`RateLimiter`].
//!
//! Services follow constructor injection. They are built once by the
//! application's composition root and shared via `Arc`, so tests can
//! construct isolated instances per case.

pub mod audit;
pub mod context;
pub mod rate_limit;

pub use audit::{AuditStore, AuditSummary};
pub use context::RequestContext;
pub use rate_limit::{RateLimiter, UNKNOWN_CLIENT_KEY};
