//! `ClientInfo` extractor: caller identity and network origin for every request.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap, header};

use giving_entity::Actor;
use giving_service::RequestContext;

/// Source address resolved once per request by the identity middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

/// Request context derived from headers and extensions. Never rejects.
#[derive(Debug, Clone)]
pub struct ClientInfo(pub RequestContext);

impl std::ops::Deref for ClientInfo {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientInfo(client_context(&parts.headers, &parts.extensions)))
    }
}

/// Resolves the caller's source address.
///
/// `X-Forwarded-For` (first entry) and `X-Real-IP` are only consulted when
/// `trust_forwarded` is set; otherwise a client could pick its own
/// rate-limit key. The socket peer address is the fallback in both cases.
pub fn resolve_client_addr(
    headers: &HeaderMap,
    extensions: &Extensions,
    trust_forwarded: bool,
) -> Option<String> {
    let forwarded = trust_forwarded
        .then(|| {
            header_value(headers, "x-forwarded-for")
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .or_else(|| header_value(headers, "x-real-ip").map(str::trim))
                .filter(|v| !v.is_empty())
        })
        .flatten();

    forwarded.map(String::from).or_else(|| peer_addr(extensions))
}

/// Builds a [`RequestContext`] from request headers and extensions.
///
/// The source address is the [`ClientAddr`] inserted by the identity
/// middleware, else the socket peer address. The actor is whatever that
/// middleware resolved from the bearer key.
pub fn client_context(headers: &HeaderMap, extensions: &Extensions) -> RequestContext {
    let ip_address = extensions
        .get::<ClientAddr>()
        .map(|ClientAddr(addr)| addr.clone())
        .or_else(|| peer_addr(extensions));

    let user_agent = header_value(headers, header::USER_AGENT.as_str()).map(String::from);
    let actor = extensions.get::<Actor>().cloned();

    RequestContext::new(actor, ip_address, user_agent)
}

fn peer_addr(extensions: &Extensions) -> Option<String> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
