//! Admin dashboard handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DashboardResponse};
use crate::extractors::AdminActor;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _admin: AdminActor,
) -> Json<ApiResponse<DashboardResponse>> {
    Json(ApiResponse::ok(DashboardResponse {
        audit: state.audit.summary().await,
        rate_limited_keys: state.admin_limiter.tracked_keys(),
        login_attempt_keys: state.login_limiter.tracked_keys(),
    }))
}
