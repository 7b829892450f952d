//! Custom Axum extractors.

pub mod admin;
pub mod client;
pub mod query;

pub use admin::AdminActor;
pub use client::{ClientAddr, ClientInfo, client_context, resolve_client_addr};
pub use query::LimitParams;
