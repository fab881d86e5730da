use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    Authenticated, Identity, SharedVerifier, ValidatedJson, authenticate,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::error::AuthResult;
use crate::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RenewRequest, RenewResponse,
};
use crate::repository::{CredentialRepository, SessionRepository};
use crate::service::AuthService;

const TAG: &str = "auth";

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(login, renew_access_token, register, logout, revoke_sessions, me),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            RenewRequest,
            RenewResponse,
            RegisterRequest,
            RegisterResponse,
            Identity
        ),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = TAG, description = "Login, token renewal and session revocation")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Create the auth router.
///
/// Logout, revoke and `/user/me` sit behind the bearer middleware backed by `verifier`.
pub fn router<S, C>(service: AuthService<S, C>, verifier: SharedVerifier) -> Router
where
    S: SessionRepository + 'static,
    C: CredentialRepository + 'static,
{
    let shared_service = Arc::new(service);

    let protected = Router::new()
        .route("/user/logout", post(logout::<S, C>))
        .route("/token/revoke", post(revoke_sessions::<S, C>))
        .route("/user/me", get(me))
        .route_layer(middleware::from_fn_with_state(verifier, authenticate));

    Router::new()
        .route("/user/login", post(login::<S, C>))
        .route("/token/renew", post(renew_access_token::<S, C>))
        .route("/user", post(register::<S, C>))
        .merge(protected)
        .with_state(shared_service)
}

/// Log in with login and password
#[utoipa::path(
    post,
    path = "/user/login",
    tag = TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session created", body = LoginResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<S: SessionRepository, C: CredentialRepository>(
    State(service): State<Arc<AuthService<S, C>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>> {
    let response = service.login(input).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/token/renew",
    tag = TAG,
    request_body = RenewRequest,
    responses(
        (status = 200, description = "New access token", body = RenewResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn renew_access_token<S: SessionRepository, C: CredentialRepository>(
    State(service): State<Arc<AuthService<S, C>>>,
    ValidatedJson(input): ValidatedJson<RenewRequest>,
) -> AuthResult<Json<RenewResponse>> {
    let response = service.renew(input).await?;
    Ok(Json(response))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<S: SessionRepository, C: CredentialRepository>(
    State(service): State<Arc<AuthService<S, C>>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AuthResult<impl IntoResponse> {
    let user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Revoke the session of the presented access token
#[utoipa::path(
    post,
    path = "/user/logout",
    tag = TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn logout<S: SessionRepository, C: CredentialRepository>(
    State(service): State<Arc<AuthService<S, C>>>,
    Authenticated(claims): Authenticated,
) -> AuthResult<StatusCode> {
    service.logout(&claims).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Revoke every session of the caller
#[utoipa::path(
    post,
    path = "/token/revoke",
    tag = TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "All sessions revoked"),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn revoke_sessions<S: SessionRepository, C: CredentialRepository>(
    State(service): State<Arc<AuthService<S, C>>>,
    Authenticated(claims): Authenticated,
) -> AuthResult<StatusCode> {
    service.revoke_all(&claims).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Identity of the caller
#[utoipa::path(
    get,
    path = "/user/me",
    tag = TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current identity", body = Identity),
        (status = 401, response = UnauthorizedResponse)
    )
)]
async fn me(Authenticated(claims): Authenticated) -> Json<Identity> {
    Json(claims.identity)
}
