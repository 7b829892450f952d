//! Axum middleware stack.

pub mod audit;
pub mod compression;
pub mod cors;
pub mod identity;
pub mod logging;
pub mod rate_limit;
