//! Trailing-window rate limit middleware.

use std::sync::Arc;

use axum::Json;
use axum::extract::{OriginalUri, Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use giving_core::config::RouteLimit;
use giving_core::error::ErrorKind;
use giving_entity::AuditAction;
use giving_service::{AuditStore, RateLimiter};

use crate::dto::response::RateLimitExceededResponse;
use crate::error::status_for;
use crate::extractors::client_context;

/// A limiter bound to one route group's `(max_requests, window_ms)` pair.
#[derive(Debug, Clone)]
pub struct RateLimitRoute {
    limiter: Arc<RateLimiter>,
    audit: Arc<AuditStore>,
    limit: RouteLimit,
    message: Arc<str>,
}

impl RateLimitRoute {
    /// Enforces `limit` with `limiter`, auditing denials into `audit`.
    pub fn new(
        limiter: Arc<RateLimiter>,
        audit: Arc<AuditStore>,
        limit: RouteLimit,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            limiter,
            audit,
            limit,
            message: message.into(),
        }
    }
}

/// Lets the request through if its source address is within the limit;
/// otherwise records an `ACCESS_DENIED` event and answers `429`.
///
/// Callers without a known address share the `"unknown"` bucket.
pub async fn enforce_rate_limit(
    State(route): State<RateLimitRoute>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = client_context(request.headers(), request.extensions());
    let limit = route.limit;
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().path(), |uri| uri.path())
        .to_owned();

    if route
        .limiter
        .is_allowed(ctx.rate_limit_key(), limit.max_requests, limit.window())
    {
        return next.run(request).await;
    }

    tracing::warn!(
        key = ctx.rate_limit_key(),
        path = %path,
        max_requests = limit.max_requests,
        window_ms = limit.window_ms,
        "Rate limit exceeded"
    );

    let event = ctx
        .audit_event(AuditAction::AccessDenied)
        .with_resource(Some(path))
        .with_success(false)
        .with_details(serde_json::json!({
            "reason": "Rate limit exceeded",
            "maxRequests": limit.max_requests,
            "windowMs": limit.window_ms,
        }));
    route.audit.record(event).await;

    rate_limit_exceeded(&limit, &route.message)
}

/// The `429` response for a denied request.
pub fn rate_limit_exceeded(limit: &RouteLimit, message: &str) -> Response {
    let retry_after = limit.retry_after_seconds();
    let (status, code) = status_for(ErrorKind::RateLimit);
    let body = RateLimitExceededResponse {
        error: code.to_string(),
        message: message.to_string(),
        retry_after,
    };

    (
        status,
        [(header::RETRY_AFTER, HeaderValue::from(retry_after))],
        Json(body),
    )
        .into_response()
}
