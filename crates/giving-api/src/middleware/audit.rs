//! Outcome-recording audit middleware.
//!
//! Wraps a route, lets the handler produce its response, then records one
//! audit event classified by the final status code. The response itself is
//! returned untouched.
//!
//! A handler that never completes produces no event.

use std::sync::Arc;

use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{RawPathParams, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use giving_entity::AuditAction;
use giving_service::AuditStore;

use crate::extractors::client_context;

/// Per-route audit registration: which action to record and against which store.
#[derive(Debug, Clone)]
pub struct AuditRoute {
    store: Arc<AuditStore>,
    action: AuditAction,
    resource: Option<&'static str>,
}

impl AuditRoute {
    /// Audits `action` into `store`.
    pub fn new(store: Arc<AuditStore>, action: AuditAction) -> Self {
        Self {
            store,
            action,
            resource: None,
        }
    }

    /// Labels recorded events with a resource kind.
    pub fn with_resource(mut self, resource: &'static str) -> Self {
        self.resource = Some(resource);
        self
    }
}

/// Whether a status code counts as a successful outcome: `[200, 400)`.
pub fn is_success(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Runs the wrapped handler and records its outcome.
pub async fn record_outcome(
    State(route): State<AuditRoute>,
    path_params: Result<RawPathParams, RawPathParamsRejection>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = client_context(request.headers(), request.extensions());
    let resource_id = path_params.ok().and_then(|params| resource_id(&params));

    let response = next.run(request).await;

    let event = ctx
        .audit_event(route.action)
        .with_resource(route.resource)
        .with_resource_id(resource_id)
        .with_success(is_success(response.status()));
    route.store.record(event).await;

    response
}

/// The `id` path parameter, or the first one when there is no `id`.
fn resource_id(params: &RawPathParams) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| *key == "id")
        .or_else(|| params.iter().next())
        .map(|(_, value)| value.to_string())
}
