//! Admin login/logout integration tests.

mod helpers;

use axum::http::StatusCode;

use giving_core::config::RouteLimit;
use giving_entity::AuditAction;
use helpers::{ADMIN_EMAIL, ADMIN_KEY, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();

    let (status, body) = app.login("Admin@Giving.test", ADMIN_KEY, "10.1.0.1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["actor"]["id"], 42);
    assert_eq!(body["data"]["actor"]["email"], ADMIN_EMAIL);

    let events = app.state.audit.list_recent(10).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::AdminLogin);
    assert_eq!(events[0].actor_id, Some(42));
    assert!(events[0].success);
}

#[tokio::test]
async fn test_login_failure_is_a_security_event() {
    let app = TestApp::new();

    let (status, body) = app.login(ADMIN_EMAIL, "wrong-key", "10.1.0.2").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let events = app.state.audit.list_security_events(10).await;
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.action, AuditAction::AdminLoginFailed);
    assert!(!event.success);
    assert!(event.actor_id.is_none());
    assert_eq!(event.ip_address, "10.1.0.2");
    assert_eq!(
        event.details,
        Some(serde_json::json!({ "email": ADMIN_EMAIL, "reason": "invalid_credentials" }))
    );
}

#[tokio::test]
async fn test_malformed_login_is_recorded_as_failure() {
    let app = TestApp::new();

    let (status, body) = app.login("not-an-email", ADMIN_KEY, "10.1.0.3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let events = app.state.audit.list_security_events(10).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::AdminLoginFailed);
    assert_eq!(events[0].ip_address, "10.1.0.3");
    assert_eq!(
        events[0].details,
        Some(serde_json::json!({ "email": "not-an-email", "reason": "validation" }))
    );
}

#[tokio::test]
async fn test_login_attempts_are_limited_per_address() {
    let app = TestApp::with_limits(RouteLimit::new(100, 60_000), RouteLimit::new(3, 60_000));

    for _ in 0..3 {
        let (status, _) = app.login(ADMIN_EMAIL, "wrong-key", "10.1.0.4").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let response = app
        .send(
            "POST",
            "/api/admin/auth/login",
            None,
            "10.1.0.4",
            Some(serde_json::json!({ "email": ADMIN_EMAIL, "api_key": ADMIN_KEY })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()["retry-after"], "60");

    // Another address is unaffected.
    let (status, _) = app.login(ADMIN_EMAIL, ADMIN_KEY, "10.1.0.5").await;
    assert_eq!(status, StatusCode::OK);

    let denied = app.state.audit.list_recent(10).await;
    let denial = denied
        .iter()
        .find(|e| e.action == AuditAction::AccessDenied)
        .unwrap();
    assert_eq!(denial.ip_address, "10.1.0.4");
    assert_eq!(denial.resource.as_deref(), Some("/api/admin/auth/login"));
    assert_eq!(
        denial.details,
        Some(serde_json::json!({
            "reason": "Rate limit exceeded",
            "maxRequests": 3,
            "windowMs": 60_000,
        }))
    );
}

#[tokio::test]
async fn test_successful_login_clears_failed_attempts() {
    let app = TestApp::with_limits(RouteLimit::new(100, 60_000), RouteLimit::new(3, 60_000));

    for _ in 0..2 {
        app.login(ADMIN_EMAIL, "wrong-key", "10.1.0.6").await;
    }
    let (status, _) = app.login(ADMIN_EMAIL, ADMIN_KEY, "10.1.0.6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.state.login_limiter.tracked_keys(), 0);

    for _ in 0..3 {
        let (status, _) = app.login(ADMIN_EMAIL, "wrong-key", "10.1.0.6").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    let (status, body) = app.login(ADMIN_EMAIL, ADMIN_KEY, "10.1.0.6").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_logout_requires_admin() {
    let app = TestApp::new();

    let (status, _) = app
        .request("POST", "/api/admin/auth/logout", None, "10.1.0.7", None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .request("POST", "/api/admin/auth/logout", Some(ADMIN_KEY), "10.1.0.7", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Logged out");

    let events = app.state.audit.list_recent(10).await;
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.action == AuditAction::AdminLogout));
    assert!(events[0].success);
    assert!(!events[1].success);
}

#[tokio::test]
async fn test_rotating_forwarded_for_does_not_escape_login_limit() {
    let app = TestApp::with_limits(RouteLimit::new(100, 60_000), RouteLimit::new(3, 60_000));
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "api_key": "wrong-key" });

    let mut statuses = Vec::new();
    for i in 0..50 {
        let response = app
            .send_forwarded(
                "POST",
                "/api/admin/auth/login",
                "192.0.2.10",
                &format!("6.6.6.{i}"),
                Some(body.clone()),
            )
            .await;
        statuses.push(response.status());
    }

    let unauthorized = statuses.iter().filter(|s| **s == StatusCode::UNAUTHORIZED).count();
    let limited = statuses
        .iter()
        .filter(|s| **s == StatusCode::TOO_MANY_REQUESTS)
        .count();
    assert_eq!(unauthorized, 3);
    assert_eq!(limited, 47);
    assert_eq!(app.state.login_limiter.tracked_keys(), 1);

    let events = app.state.audit.list_recent(1).await;
    assert_eq!(events[0].ip_address, "192.0.2.10");
}

#[tokio::test]
async fn test_forwarded_for_is_used_when_trusted() {
    let mut config = TestApp::config(RouteLimit::new(100, 60_000), RouteLimit::new(1, 60_000));
    config.server.trust_forwarded_headers = true;
    let app = TestApp::with_config(config);
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "api_key": "wrong-key" });

    for client in ["203.0.113.1", "203.0.113.2"] {
        let response = app
            .send_forwarded(
                "POST",
                "/api/admin/auth/login",
                "10.0.0.254",
                &format!("{client}, 10.0.0.254"),
                Some(body.clone()),
            )
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = app
        .send_forwarded(
            "POST",
            "/api/admin/auth/login",
            "10.0.0.254",
            "203.0.113.1",
            Some(body.clone()),
        )
        .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(app.state.login_limiter.tracked_keys(), 2);

    let events = app.state.audit.list_recent(1).await;
    assert_eq!(events[0].ip_address, "203.0.113.1");
}
