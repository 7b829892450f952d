//! Caller identity middleware: bearer-key actor and source address.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use giving_entity::Actor;

use crate::extractors::{ClientAddr, resolve_client_addr};
use crate::state::AppState;

/// Resolves the caller once per request for every inner layer.
///
/// `Authorization: Bearer <api_key>` is matched against the configured
/// admins and the [`Actor`] is inserted into request extensions. The source
/// address is inserted as [`ClientAddr`], honouring forwarded headers only
/// when `server.trust_forwarded_headers` is set.
///
/// Never rejects: unknown or missing keys leave the request anonymous, and
/// admin handlers refuse it through the `AdminActor` extractor.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let actor = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|key| state.config.auth.find_by_api_key(key.trim()))
        .map(|account| Actor::new(account.id, account.email.clone()));

    let addr = resolve_client_addr(
        request.headers(),
        request.extensions(),
        state.config.server.trust_forwarded_headers,
    );

    if let Some(actor) = actor {
        request.extensions_mut().insert(actor);
    }
    if let Some(addr) = addr {
        request.extensions_mut().insert(ClientAddr(addr));
    }

    next.run(request).await
}
