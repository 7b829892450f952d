//! Admin audit trail.

pub mod store;

pub use store::{AuditStore, AuditSummary};
