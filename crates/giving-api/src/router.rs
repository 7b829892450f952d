//! Route definitions for the admin HTTP API.
//!
//! All routes are mounted under `/api`. Per request the layers run as:
//! identity resolution → rate limit (may answer `429`) → audit → handler.

use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{MethodRouter, delete, get, post},
};

use giving_core::config::RouteLimit;
use giving_entity::AuditAction;
use giving_service::RateLimiter;

use crate::handlers;
use crate::middleware;
use crate::middleware::audit::AuditRoute;
use crate::middleware::rate_limit::RateLimitRoute;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(login_routes(&state))
        .merge(admin_routes(&state));

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identity::resolve_identity,
        ))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness probe; neither limited nor audited.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Login is audited by its handler, which distinguishes success and failure.
fn login_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/auth/login", post(handlers::auth::login))
        .route_layer(axum_middleware::from_fn_with_state(
            rate_limit_route(state, &state.login_limiter, state.config.rate_limit.login),
            middleware::rate_limit::enforce_rate_limit,
        ))
}

/// Authenticated back-office endpoints.
fn admin_routes(state: &AppState) -> Router<AppState> {
    let audited = |route: MethodRouter<AppState>, action: AuditAction, resource: &'static str| {
        route.route_layer(axum_middleware::from_fn_with_state(
            AuditRoute::new(Arc::clone(&state.audit), action).with_resource(resource),
            middleware::audit::record_outcome,
        ))
    };

    Router::new()
        .route(
            "/admin/auth/logout",
            audited(post(handlers::auth::logout), AuditAction::AdminLogout, "admin_session"),
        )
        .route(
            "/admin/dashboard",
            audited(
                get(handlers::admin::dashboard::dashboard),
                AuditAction::ViewDashboard,
                "dashboard",
            ),
        )
        .route(
            "/admin/audit/recent",
            audited(
                get(handlers::admin::audit::list_recent),
                AuditAction::ViewLogs,
                "audit_log",
            ),
        )
        .route(
            "/admin/audit/security",
            audited(
                get(handlers::admin::audit::list_security),
                AuditAction::ViewLogs,
                "audit_log",
            ),
        )
        .route(
            "/admin/audit/actors/{id}",
            audited(
                get(handlers::admin::audit::list_by_actor),
                AuditAction::ViewLogs,
                "audit_log",
            ),
        )
        .route(
            "/admin/rate-limits/{key}",
            audited(
                delete(handlers::admin::rate_limits::unblock),
                AuditAction::UnblockRateLimit,
                "rate_limit",
            ),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            rate_limit_route(state, &state.admin_limiter, state.config.rate_limit.admin),
            middleware::rate_limit::enforce_rate_limit,
        ))
}

fn rate_limit_route(state: &AppState, limiter: &Arc<RateLimiter>, limit: RouteLimit) -> RateLimitRoute {
    RateLimitRoute::new(
        Arc::clone(limiter),
        Arc::clone(&state.audit),
        limit,
        state.config.rate_limit.message.as_str(),
    )
}
