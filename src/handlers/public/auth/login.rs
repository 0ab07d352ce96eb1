// handlers/public/auth/login.rs - POST /api/auth/login

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::api::dto::LoginDto;
use crate::auth::service::AuthToken;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Exchange username and password for a bearer token.
///
/// ```json
/// { "accessToken": "eyJhbGciOiJIUzI1NiI...", "tokenType": "Bearer " }
/// ```
///
/// Unknown users and wrong passwords both answer 401.
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> ApiResult<AuthToken> {
    let Json(login) = payload?;
    let token = state.auth.login(&login.username, &login.password).await?;
    Ok(ApiResponse::success(token))
}
