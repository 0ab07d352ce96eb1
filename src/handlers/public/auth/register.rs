// handlers/public/auth/register.rs - POST /api/auth/register

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::api::dto::RegisterDto;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Create a `USER` account. A taken username answers 400.
pub async fn register_post(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(register) = payload?;
    state.auth.register(&register.username, &register.password).await?;
    Ok(ApiResponse::success(json!({ "message": "User registered success!" })))
}
