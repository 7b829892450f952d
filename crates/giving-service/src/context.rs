//! Request context carrying the caller identity and network origin.

use serde::{Deserialize, Serialize};

use giving_entity::{Actor, AuditAction, NewAuditEvent};

use crate::rate_limit::UNKNOWN_CLIENT_KEY;

/// Who is calling and from where.
///
/// Built by the HTTP layer for every request and handed to services so
/// that audit records and rate-limit keys are derived consistently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated admin, if any.
    pub actor: Option<Actor>,
    /// Source address of the request origin.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(actor: Option<Actor>, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            actor,
            ip_address,
            user_agent,
        }
    }

    /// Key under which this caller is rate limited.
    ///
    /// Callers without a source address all share one bucket.
    pub fn rate_limit_key(&self) -> &str {
        self.ip_address.as_deref().unwrap_or(UNKNOWN_CLIENT_KEY)
    }

    /// Starts an audit event pre-filled with this caller's identity and origin.
    pub fn audit_event(&self, action: AuditAction) -> NewAuditEvent {
        NewAuditEvent::new(action)
            .with_actor(self.actor.clone())
            .with_origin(self.ip_address.clone(), self.user_agent.clone())
    }
}
