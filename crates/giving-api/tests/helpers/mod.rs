//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response, StatusCode, header, request};
use serde_json::Value;
use tower::ServiceExt;

use giving_api::{AppState, build_app};
use giving_core::config::{AdminAccount, AppConfig, RouteLimit};

pub const ADMIN_EMAIL: &str = "admin@giving.test";
pub const ADMIN_KEY: &str = "key-admin-42";
pub const AUDITOR_EMAIL: &str = "auditor@giving.test";
pub const AUDITOR_KEY: &str = "key-auditor-7";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting the audit store and limiters directly
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with two admins (42 and 7) and the given limits
    pub fn with_limits(admin: RouteLimit, login: RouteLimit) -> Self {
        Self::with_config(Self::config(admin, login))
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Base test configuration: two admins (42 and 7) and the given limits
    pub fn config(admin: RouteLimit, login: RouteLimit) -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.admins = vec![
            AdminAccount {
                id: 42,
                email: ADMIN_EMAIL.to_string(),
                api_key: ADMIN_KEY.to_string(),
            },
            AdminAccount {
                id: 7,
                email: AUDITOR_EMAIL.to_string(),
                api_key: AUDITOR_KEY.to_string(),
            },
        ];
        config.rate_limit.admin = admin;
        config.rate_limit.login = login;
        config.rate_limit.message = "Too many requests".to_string();
        config
    }

    /// Create a test application with generous limits
    pub fn new() -> Self {
        Self::with_limits(RouteLimit::new(100, 60_000), RouteLimit::new(5, 60_000))
    }

    /// Send a request and return status + parsed JSON body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        ip: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.send(method, uri, token, ip, body).await;
        let status = response.status();
        (status, read_json(response).await)
    }

    /// Send a request from socket peer `ip` and return the raw response
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        ip: &str,
        body: Option<Value>,
    ) -> Response<Body> {
        self.dispatch(builder(method, uri, token, ip), body).await
    }

    /// Send a request from socket peer `ip` carrying an `X-Forwarded-For` header
    pub async fn send_forwarded(
        &self,
        method: &str,
        uri: &str,
        ip: &str,
        forwarded_for: &str,
        body: Option<Value>,
    ) -> Response<Body> {
        let builder = builder(method, uri, None, ip).header("x-forwarded-for", forwarded_for);
        self.dispatch(builder, body).await
    }

    async fn dispatch(&self, builder: request::Builder, body: Option<Value>) -> Response<Body> {
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// POST /api/admin/auth/login
    pub async fn login(&self, email: &str, api_key: &str, ip: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/api/admin/auth/login",
            None,
            ip,
            Some(serde_json::json!({ "email": email, "api_key": api_key })),
        )
        .await
    }
}

fn builder(method: &str, uri: &str, token: Option<&str>, ip: &str) -> request::Builder {
    let peer: IpAddr = ip.parse().unwrap();
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::USER_AGENT, "integration-test")
        .extension(ConnectInfo(SocketAddr::new(peer, 40_000)));

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
}

/// Parse a response body as JSON; non-JSON bodies become `Value::Null`
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
