//! Administrative rate-limit unblocking.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AdminActor;
use crate::state::AppState;

/// DELETE /api/admin/rate-limits/{key}
///
/// Clears the key from both the admin and login limiters.
pub async fn unblock(
    State(state): State<AppState>,
    admin: AdminActor,
    Path(key): Path<String>,
) -> Json<ApiResponse<MessageResponse>> {
    state.admin_limiter.reset(&key);
    state.login_limiter.reset(&key);
    tracing::info!(actor_id = admin.id, key = %key, "Rate limit cleared");
    Json(ApiResponse::ok(MessageResponse::new(format!(
        "Rate limit cleared for {key}"
    ))))
}
