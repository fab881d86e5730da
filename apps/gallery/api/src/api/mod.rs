use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};

pub mod health;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use domain_auth::{AuthService, PgCredentialRepository, PgSessionRepository};

/// The complete application: API routes, docs, layers, `/health` and `/ready`.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state))
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}

/// Creates the API routes, merged at the root by `create_router`.
pub fn routes(state: &AppState) -> Router {
    let service = AuthService::new(
        PgSessionRepository::new(state.db.clone()),
        PgCredentialRepository::new(state.db.clone()),
        state.tokens.clone(),
        &state.config.token,
    );

    domain_auth::handlers::router(service, state.verifier.clone())
}

/// Router with the `/ready` endpoint that pings the database.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthBackend, Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::AUTHORIZATION};
    use axum_helpers::TokenConfig;
    use chrono::Duration;
    use core_config::{app_info, database::DatabaseConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;
    use tower::ServiceExt;

    fn state() -> AppState {
        let config = Config {
            app: app_info!(),
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::new("postgres://localhost/gallery"),
            token: TokenConfig::new("this-is-a-valid-secret-with-32-chars!").unwrap(),
            auth_backend: AuthBackend::Local,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        AppState::new(config, db).unwrap()
    }

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = app(&state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let (status, body) = call(Request::get("/health").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "gallery_api");
    }

    #[tokio::test]
    async fn test_protected_routes_are_wired_behind_bearer() {
        let (status, body) = call(
            Request::post("/user/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "unauthorized");

        let (status, _) = call(
            Request::post("/token/revoke")
                .header(AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_uses_configured_verifier() {
        let state = state();
        let (token, _) = state
            .tokens
            .create_token(4, "dora", true, Duration::minutes(5))
            .unwrap();

        let response = app(&state)
            .oneshot(
                Request::get("/user/me")
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["login"], "dora");
        assert_eq!(body["is_admin"], true);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = call(Request::get("/nope").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found");
    }
}
