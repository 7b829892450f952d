//! Admin auth handlers: login and logout.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use giving_core::error::AppError;
use giving_entity::{Actor, AuditAction};

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminActor, ClientInfo};
use crate::state::AppState;

/// POST /api/admin/auth/login
///
/// Records `ADMIN_LOGIN` or `ADMIN_LOGIN_FAILED`; bodies that fail
/// validation count as failed logins. A successful login clears the
/// caller's earlier failed attempts from the login limiter.
pub async fn login(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    if let Err(errors) = req.validate() {
        record_failed_login(&state, &client, &req.email, "validation").await;
        return Err(errors.into());
    }

    let Some(account) = state.config.auth.verify(&req.email, &req.api_key) else {
        record_failed_login(&state, &client, &req.email, "invalid_credentials").await;
        return Err(AppError::authentication("Invalid credentials").into());
    };

    let actor = Actor::new(account.id, account.email.clone());
    state.login_limiter.reset(client.rate_limit_key());
    state
        .audit
        .record(
            client
                .audit_event(AuditAction::AdminLogin)
                .with_actor(Some(actor.clone()))
                .with_resource(Some("admin_session")),
        )
        .await;

    tracing::info!(actor_id = actor.id, "Admin logged in");
    Ok(Json(ApiResponse::ok(LoginResponse { actor })))
}

async fn record_failed_login(state: &AppState, client: &ClientInfo, email: &str, reason: &str) {
    state
        .audit
        .record(
            client
                .audit_event(AuditAction::AdminLoginFailed)
                .with_resource(Some("admin_session"))
                .with_success(false)
                .with_details(serde_json::json!({ "email": email, "reason": reason })),
        )
        .await;
}

/// POST /api/admin/auth/logout
pub async fn logout(admin: AdminActor) -> Json<ApiResponse<MessageResponse>> {
    tracing::info!(actor_id = admin.id, "Admin logged out");
    Json(ApiResponse::ok(MessageResponse::new("Logged out")))
}
