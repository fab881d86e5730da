//! Handler tests for the auth domain
//!
//! These run the real router (bearer middleware included) over in-memory repositories
//! and a real token maker, so the whole session lifecycle is exercised end to end.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum_helpers::{Identity, LocalTokenVerifier, SharedVerifier, TokenConfig, TokenMaker};
use domain_auth::password::hash_password;
use domain_auth::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

struct TestApp {
    router: Router,
    sessions: InMemorySessionRepository,
    tokens: Arc<TokenMaker>,
}

impl TestApp {
    async fn new() -> Self {
        let config = TokenConfig::new(SECRET).unwrap();
        let tokens = Arc::new(TokenMaker::new(&config));
        let verifier: SharedVerifier = Arc::new(LocalTokenVerifier::new(tokens.clone()));

        let sessions = InMemorySessionRepository::new();
        let credentials = InMemoryCredentialRepository::new();
        credentials
            .create_user(NewUser {
                login: "alice".to_string(),
                password_hash: hash_password("secret123").unwrap(),
                is_admin: false,
            })
            .await
            .unwrap();

        let service = AuthService::new(sessions.clone(), credentials, tokens.clone(), &config);

        Self {
            router: handlers::router(service, verifier),
            sessions,
            tokens,
        }
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();

        send(self.router.clone(), request).await
    }

    async fn with_bearer(&self, method: &str, uri: &str, token: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        send(self.router.clone(), request).await
    }

    async fn login(&self) -> LoginResponse {
        let (status, body) = self
            .post(
                "/user/login",
                json!({"login": "alice", "password": "secret123"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body).unwrap()
    }

    async fn renew(&self, refresh_token: &str) -> (StatusCode, Value) {
        self.post("/token/renew", json!({"refresh_token": refresh_token}))
            .await
    }
}

// Helper to parse JSON response body; empty bodies come back as Null
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_login_returns_token_pair_and_session() {
    let app = TestApp::new().await;

    let response = app.login().await;

    let access = app.tokens.verify_token(&response.access_token).unwrap();
    let refresh = app.tokens.verify_token(&response.refresh_token).unwrap();
    assert_eq!(response.login, "alice");
    assert_eq!(response.session_id, refresh.jti);
    assert_eq!(access.exp - access.iat, 15 * 60);
    assert_eq!(refresh.exp - refresh.iat, 24 * 60 * 60);
    assert_eq!(response.access_token_expires_at, access.expires_at());

    let session = app
        .sessions
        .get_by_id(&response.session_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.user_login, "alice");
    assert_eq!(session.access_token, response.access_token);
    assert_eq!(session.refresh_token, response.refresh_token);
    assert_eq!(session.expires_at, refresh.expires_at());
    assert!(!session.is_revoked);
}

#[tokio::test]
async fn test_login_error_statuses() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/user/login", json!({"login": "", "password": "secret123"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");

    let (status, body) = app
        .post("/user/login", json!({"login": "mallory", "password": "x"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");

    let (status, body) = app
        .post("/user/login", json!({"login": "alice", "password": "wrong"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "invalid_credentials");

    let long_login = "a".repeat(200);
    let (status, body) = app
        .post("/user/login", json!({"login": long_login, "password": "x"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");

    let long_password = "p".repeat(500);
    let (status, body) = app
        .post("/user/login", json!({"login": "alice", "password": long_password}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "invalid_credentials");

    let (status, body) = app.post("/user/login", json!({"login": "alice"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_json");
}

#[tokio::test]
async fn test_renew_keeps_refresh_token_and_can_repeat() {
    let app = TestApp::new().await;
    let login = app.login().await;

    let mut last_access = login.access_token.clone();
    for _ in 0..3 {
        let (status, body) = app.renew(&login.refresh_token).await;
        assert_eq!(status, StatusCode::OK);

        let renewed: RenewResponse = serde_json::from_value(body).unwrap();
        let claims = app.tokens.verify_token(&renewed.access_token).unwrap();
        assert_eq!(claims.login, "alice");
        assert_ne!(renewed.access_token, last_access);

        let session = app
            .sessions
            .get_by_id(&login.session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.access_token, renewed.access_token);
        assert_eq!(session.refresh_token, login.refresh_token);

        last_access = renewed.access_token;
    }
}

#[tokio::test]
async fn test_renew_rejects_bad_input() {
    let app = TestApp::new().await;
    let login = app.login().await;

    let (status, _) = app.renew("").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.renew("garbage").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // An access token verifies but has no session behind its jti
    let (status, _) = app.renew(&login.access_token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new().await;
    let login = app.login().await;

    let (status, body) = app
        .with_bearer("POST", "/user/logout", &login.access_token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.renew(&login.refresh_token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // No token issued and the stored access token is untouched
    let session = app
        .sessions
        .get_by_id(&login.session_id)
        .await
        .unwrap()
        .unwrap();
    assert!(session.is_revoked);
    assert_eq!(session.access_token, login.access_token);
}

#[tokio::test]
async fn test_logout_only_revokes_the_current_session() {
    let app = TestApp::new().await;
    let first = app.login().await;
    let second = app.login().await;

    let (status, _) = app
        .with_bearer("POST", "/user/logout", &first.access_token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(app.renew(&first.refresh_token).await.0, StatusCode::UNAUTHORIZED);
    assert_eq!(app.renew(&second.refresh_token).await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_revoke_all_sessions() {
    let app = TestApp::new().await;
    let first = app.login().await;
    let second = app.login().await;

    let (status, _) = app
        .with_bearer("POST", "/token/revoke", &second.access_token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(app.renew(&first.refresh_token).await.0, StatusCode::UNAUTHORIZED);
    assert_eq!(app.renew(&second.refresh_token).await.0, StatusCode::UNAUTHORIZED);

    // Revoking again is not an error
    let (status, _) = app
        .with_bearer("POST", "/token/revoke", &second.access_token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_protected_routes_require_bearer() {
    let app = TestApp::new().await;
    let login = app.login().await;

    for uri in ["/user/logout", "/token/revoke"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app.router.clone(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(AUTHORIZATION, format!("bearer {}", login.access_token))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app.router.clone(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // A rejected logout leaves the session alone
    let session = app
        .sessions
        .get_by_id(&login.session_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!session.is_revoked);

    let (status, _) = app.with_bearer("POST", "/user/logout", "forged").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_identity() {
    let app = TestApp::new().await;
    let login = app.login().await;

    let (status, body) = app.with_bearer("GET", "/user/me", &login.access_token).await;

    assert_eq!(status, StatusCode::OK);
    let identity: Identity = serde_json::from_value(body).unwrap();
    assert_eq!(identity.id, 1);
    assert_eq!(identity.login, "alice");
    assert!(!identity.is_admin);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/user", json!({"login": "bob", "password": "hunter22"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let registered: RegisterResponse = serde_json::from_value(body).unwrap();
    assert_eq!(registered.login, "bob");
    assert_eq!(registered.id, 2);

    let (status, _) = app
        .post("/user/login", json!({"login": "bob", "password": "hunter22"}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post("/user", json!({"login": "bob", "password": "other"}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["type"], "duplicate");

    let (status, _) = app.post("/user", json!({"login": "carol", "password": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
