//! Audit log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use crate::dto::response::{ApiResponse, AuditEventsResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminActor, LimitParams};
use crate::state::AppState;

/// GET /api/admin/audit/recent
pub async fn list_recent(
    State(state): State<AppState>,
    _admin: AdminActor,
    Query(params): Query<LimitParams>,
) -> ApiResult<Json<ApiResponse<AuditEventsResponse>>> {
    let limit = effective_limit(&state, &params)?;
    let items = state.audit.list_recent(limit).await;
    Ok(Json(ApiResponse::ok(AuditEventsResponse::new(items, limit))))
}

/// GET /api/admin/audit/security
pub async fn list_security(
    State(state): State<AppState>,
    _admin: AdminActor,
    Query(params): Query<LimitParams>,
) -> ApiResult<Json<ApiResponse<AuditEventsResponse>>> {
    let limit = effective_limit(&state, &params)?;
    let items = state.audit.list_security_events(limit).await;
    Ok(Json(ApiResponse::ok(AuditEventsResponse::new(items, limit))))
}

/// GET /api/admin/audit/actors/{id}
pub async fn list_by_actor(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(actor_id): Path<i64>,
    Query(params): Query<LimitParams>,
) -> ApiResult<Json<ApiResponse<AuditEventsResponse>>> {
    let limit = effective_limit(&state, &params)?;
    let items = state.audit.list_by_actor(actor_id, limit).await;
    Ok(Json(ApiResponse::ok(AuditEventsResponse::new(items, limit))))
}

fn effective_limit(state: &AppState, params: &LimitParams) -> ApiResult<usize> {
    params.validate()?;
    Ok(params.resolve(
        state.config.audit.default_list_limit,
        state.audit.capacity(),
    ))
}
