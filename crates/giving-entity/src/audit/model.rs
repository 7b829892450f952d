//! Audit event entity model.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::action::AuditAction;
use crate::actor::Actor;

/// Placeholder used when the network origin of a request is unavailable.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// An immutable audit record of one admin action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Acting user, absent for anonymous or failed-auth requests.
    pub actor_id: Option<i64>,
    /// Acting user's e-mail.
    pub actor_email: Option<String>,
    /// What was attempted.
    pub action: AuditAction,
    /// Kind of entity targeted (e.g. `"campaign"`, `"user"`).
    pub resource: Option<String>,
    /// Identifier of the targeted entity.
    pub resource_id: Option<String>,
    /// Source address of the request, or [`UNKNOWN_ORIGIN`].
    pub ip_address: String,
    /// User-Agent of the request, or [`UNKNOWN_ORIGIN`].
    pub user_agent: String,
    /// Whether the action succeeded.
    pub success: bool,
    /// Additional context, opaque to the store.
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    /// Stamps a new event with the given time.
    pub fn from_new(new: NewAuditEvent, timestamp: DateTime<Utc>) -> Self {
        let (actor_id, actor_email) = match new.actor {
            Some(actor) => (Some(actor.id), Some(actor.email)),
            None => (None, None),
        };
        Self {
            id: Uuid::now_v7(),
            timestamp,
            actor_id,
            actor_email,
            action: new.action,
            resource: new.resource,
            resource_id: new.resource_id,
            ip_address: non_empty_or_unknown(new.ip_address),
            user_agent: non_empty_or_unknown(new.user_agent),
            success: new.success,
            details: new.details,
        }
    }

    /// Whether the event belongs in the security log.
    pub fn is_security_event(&self) -> bool {
        !self.success || self.action.is_security_sensitive()
    }
}

/// Human-readable single-line rendering used for the operational log.
impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ADMIN AUDIT] {} - {} - User: {} (ID: ",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            if self.success { "SUCCESS" } else { "FAILED" },
            self.actor_email.as_deref().unwrap_or("anonymous"),
        )?;
        match self.actor_id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("none")?,
        }
        write!(
            f,
            ") - Action: {} - IP: {} - Resource: {}",
            self.action,
            self.ip_address,
            self.resource.as_deref().unwrap_or("none"),
        )?;
        if let Some(resource_id) = &self.resource_id {
            write!(f, "({resource_id})")?;
        }
        f.write_str(" - Details: ")?;
        match &self.details {
            Some(details) => write!(f, "{details}"),
            None => f.write_str("none"),
        }
    }
}

/// Data required to record a new audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuditEvent {
    /// Acting user, if authenticated.
    pub actor: Option<Actor>,
    /// Action performed.
    pub action: AuditAction,
    /// Targeted entity kind.
    pub resource: Option<String>,
    /// Targeted entity identifier.
    pub resource_id: Option<String>,
    /// Source address, if known.
    pub ip_address: Option<String>,
    /// User-Agent, if known.
    pub user_agent: Option<String>,
    /// Outcome.
    pub success: bool,
    /// Additional context.
    pub details: Option<serde_json::Value>,
}

impl NewAuditEvent {
    /// A successful, anonymous event with no metadata.
    pub fn new(action: AuditAction) -> Self {
        Self {
            actor: None,
            action,
            resource: None,
            resource_id: None,
            ip_address: None,
            user_agent: None,
            success: true,
            details: None,
        }
    }

    /// Set the acting user.
    pub fn with_actor(mut self, actor: Option<Actor>) -> Self {
        self.actor = actor;
        self
    }

    /// Set the targeted resource kind.
    pub fn with_resource(mut self, resource: Option<impl Into<String>>) -> Self {
        self.resource = resource.map(Into::into);
        self
    }

    /// Set the targeted resource identifier.
    pub fn with_resource_id(mut self, resource_id: Option<impl Into<String>>) -> Self {
        self.resource_id = resource_id.map(Into::into);
        self
    }

    /// Set the request origin.
    pub fn with_origin(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    /// Set the outcome.
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Attach structured context.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_origin_falls_back_to_placeholder() {
        let event = AuditEvent::from_new(
            NewAuditEvent::new(AuditAction::ViewDashboard).with_origin(None, Some("  ".into())),
            at_noon(),
        );
        assert_eq!(event.ip_address, UNKNOWN_ORIGIN);
        assert_eq!(event.user_agent, UNKNOWN_ORIGIN);
        assert!(event.actor_id.is_none());
    }

    #[test]
    fn test_log_line_for_authenticated_success() {
        let event = AuditEvent::from_new(
            NewAuditEvent::new(AuditAction::DeleteCampaign)
                .with_actor(Some(Actor::new(42, "admin@giving.test")))
                .with_resource(Some("campaign"))
                .with_resource_id(Some("17"))
                .with_origin(Some("10.0.0.1".into()), Some("curl/8".into()))
                .with_details(serde_json::json!({"reason": "spam"})),
            at_noon(),
        );
        assert_eq!(
            event.to_string(),
            "[ADMIN AUDIT] 2024-03-01T12:00:00.000Z - SUCCESS - User: admin@giving.test (ID: 42) \
             - Action: DELETE_CAMPAIGN - IP: 10.0.0.1 - Resource: campaign(17) \
             - Details: {\"reason\":\"spam\"}"
        );
    }

    #[test]
    fn test_log_line_for_anonymous_failure() {
        let event = AuditEvent::from_new(
            NewAuditEvent::new(AuditAction::AccessDenied).with_success(false),
            at_noon(),
        );
        assert_eq!(
            event.to_string(),
            "[ADMIN AUDIT] 2024-03-01T12:00:00.000Z - FAILED - User: anonymous (ID: none) \
             - Action: ACCESS_DENIED - IP: unknown - Resource: none - Details: none"
        );
    }

    #[test]
    fn test_security_classification() {
        let failed_view = AuditEvent::from_new(
            NewAuditEvent::new(AuditAction::ViewLogs).with_success(false),
            at_noon(),
        );
        let role_change = AuditEvent::from_new(NewAuditEvent::new(AuditAction::ChangeUserRole), at_noon());
        let plain_view = AuditEvent::from_new(NewAuditEvent::new(AuditAction::ViewLogs), at_noon());

        assert!(failed_view.is_security_event());
        assert!(role_change.is_security_event());
        assert!(!plain_view.is_security_event());
    }

    #[test]
    fn test_serializes_camel_case() {
        let event = AuditEvent::from_new(
            NewAuditEvent::new(AuditAction::ViewUser).with_actor(Some(Actor::new(7, "a@b.c"))),
            at_noon(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["actorId"], 7);
        assert_eq!(json["action"], "VIEW_USER");
        assert_eq!(json["ipAddress"], "unknown");
    }
}
