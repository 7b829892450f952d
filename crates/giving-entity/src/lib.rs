//! # giving-entity
//!
//! Domain value objects for the Giving admin service: audit events, the
//! closed set of audited actions, and the authenticated actor identity.
//! All entities derive `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod actor;
pub mod audit;

pub use actor::Actor;
pub use audit::{AuditAction, AuditEvent, NewAuditEvent};
