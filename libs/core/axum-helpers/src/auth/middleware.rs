use super::claims::AccessClaims;
use super::error::AuthError;
use super::verifier::SharedVerifier;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

/// Request extension slot for verified claims. Private so nothing else can insert or
/// shadow it; handlers read it through [`Authenticated`].
#[derive(Clone)]
struct VerifiedClaims(AccessClaims);

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is case-sensitive, exactly one space separates it from the token and the
/// token itself must be non-empty without inner whitespace.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MissingCredentials)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MissingCredentials)?;

    if scheme != "Bearer" || token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}

/// Bearer token authentication middleware.
///
/// Verifies the token with whichever [`TokenVerifier`](super::TokenVerifier) backs the
/// state and attaches [`AccessClaims`] to the request. The wrapped handler never runs on
/// failure.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::auth::{SharedVerifier, authenticate};
///
/// let protected = Router::new()
///     .route("/user/logout", post(logout))
///     .route_layer(axum::middleware::from_fn_with_state(verifier.clone(), authenticate));
/// ```
pub async fn authenticate(
    State(verifier): State<SharedVerifier>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_owned(),
        Err(e) => {
            tracing::debug!("Rejected request without a usable bearer token");
            return Err(e);
        }
    };

    let identity = verifier.verify(&token).await?;
    tracing::debug!(login = %identity.login, "Request authenticated");

    request
        .extensions_mut()
        .insert(VerifiedClaims(AccessClaims::new(identity, token)));
    Ok(next.run(request).await)
}

/// Extractor for the claims attached by [`authenticate`].
///
/// Rejects with 401 when used on a route the middleware does not cover.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AccessClaims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedClaims>()
            .map(|claims| Authenticated(claims.0.clone()))
            .ok_or(AuthError::MissingCredentials)
    }
}
