use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{json, Value};

use crate::api::dto::ReviewDto;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/pokemon/:pokemon_id/review
pub async fn review_create(
    State(state): State<AppState>,
    pokemon_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> ApiResult<ReviewDto> {
    let Path(pokemon_id) = pokemon_id?;
    let Json(dto) = payload?;
    Ok(ApiResponse::created(state.reviews.create_review(pokemon_id, dto).await?))
}

/// GET /api/pokemon/:pokemon_id/reviews
pub async fn review_list(
    State(state): State<AppState>,
    pokemon_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<ReviewDto>> {
    let Path(pokemon_id) = pokemon_id?;
    Ok(ApiResponse::success(state.reviews.get_reviews_by_pokemon_id(pokemon_id).await?))
}

/// GET /api/pokemon/:pokemon_id/reviews/:review_id
pub async fn review_get(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<ReviewDto> {
    let Path((pokemon_id, review_id)) = ids?;
    Ok(ApiResponse::success(state.reviews.get_review_by_id(pokemon_id, review_id).await?))
}

/// PUT /api/pokemon/:pokemon_id/reviews/:review_id
pub async fn review_put(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> ApiResult<ReviewDto> {
    let Path((pokemon_id, review_id)) = ids?;
    let Json(dto) = payload?;
    let updated = state.reviews.update_review(pokemon_id, review_id, dto).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/pokemon/:pokemon_id/reviews/:review_id
pub async fn review_delete(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Value> {
    let Path((pokemon_id, review_id)) = ids?;
    state.reviews.delete_review(pokemon_id, review_id).await?;
    Ok(ApiResponse::success(json!({ "message": "Review deleted successfully" })))
}
