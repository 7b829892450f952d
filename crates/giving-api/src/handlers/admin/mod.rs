//! Admin-only handlers.

pub mod audit;
pub mod dashboard;
pub mod rate_limits;
