use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::auth::service::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Runs once per request. A request without a bearer token passes through
/// anonymously; one with a bad token is rejected here.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(token) = extract_bearer_token(request.headers()).map_err(ApiError::unauthorized)? {
        let auth_user = state.auth.authenticate(&token).await.map_err(|e| {
            warn!("Rejected bearer token on {}: {}", request.uri().path(), e);
            ApiError::from(e)
        })?;

        request.extensions_mut().insert(auth_user);
    }

    Ok(next.run(request).await)
}

/// Authorization check for protected routes
pub async fn require_auth_middleware(request: Request, next: Next) -> Result<Response, ApiError> {
    if request.extensions().get::<AuthUser>().is_none() {
        return Err(ApiError::unauthorized("Authentication required"));
    }

    Ok(next.run(request).await)
}

/// `Ok(None)` when there is no bearer credential at all
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, String> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if token.trim().is_empty() => Err("Empty JWT token".to_string()),
        Some(token) => Ok(Some(token.trim().to_string())),
        None => Ok(None),
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}
