use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::api::dto::{PokemonDto, PokemonResponse};
use crate::auth::service::AuthUser;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

/// GET /api/pokemon?pageNo=&pageSize=
pub async fn pokemon_list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<PokemonResponse> {
    let Query(page) = query?;
    let response = state.pokemon.get_all_pokemon(page.page_no, page.page_size).await?;
    Ok(ApiResponse::success(response))
}

/// POST /api/pokemon
pub async fn pokemon_create(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> ApiResult<PokemonDto> {
    let Json(dto) = payload?;
    let created = state.pokemon.create_pokemon(dto).await?;
    info!("Pokemon {} created by '{}'", created.id, user.username);
    Ok(ApiResponse::created(created))
}

/// GET /api/pokemon/:pokemon_id
pub async fn pokemon_get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<PokemonDto> {
    let Path(id) = id?;
    Ok(ApiResponse::success(state.pokemon.get_pokemon_by_id(id).await?))
}

/// GET /api/pokemon/type/:type
pub async fn pokemon_get_by_type(
    State(state): State<AppState>,
    pokemon_type: Result<Path<String>, PathRejection>,
) -> ApiResult<PokemonDto> {
    let Path(pokemon_type) = pokemon_type?;
    Ok(ApiResponse::success(state.pokemon.get_pokemon_by_type(&pokemon_type).await?))
}

/// PUT /api/pokemon/:pokemon_id
pub async fn pokemon_put(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> ApiResult<PokemonDto> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    Ok(ApiResponse::success(state.pokemon.update_pokemon(dto, id).await?))
}

/// DELETE /api/pokemon/:pokemon_id
pub async fn pokemon_delete(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Value> {
    let Path(id) = id?;
    state.pokemon.delete_pokemon_id(id).await?;
    info!("Pokemon {} deleted by '{}'", id, user.username);
    Ok(ApiResponse::success(json!({ "message": "Pokemon deleted" })))
}
