//! `AdminActor` extractor: requires an authenticated admin on the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use giving_core::error::AppError;
use giving_entity::Actor;

use crate::error::ApiError;

/// The authenticated admin. Rejects with `401` when the request is anonymous.
#[derive(Debug, Clone)]
pub struct AdminActor(pub Actor);

impl std::ops::Deref for AdminActor {
    type Target = Actor;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .cloned()
            .map(AdminActor)
            .ok_or_else(|| AppError::authentication("Admin authentication required").into())
    }
}
