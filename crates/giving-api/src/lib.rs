//! # giving-api
//!
//! HTTP layer for the Giving admin back-office built on Axum.
//!
//! Provides the admin endpoints, the audit and rate-limit middleware,
//! bearer-key actor resolution, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
