pub mod pokemon_service;
pub mod review_service;

pub use pokemon_service::PokemonService;
pub use review_service::ReviewService;

use crate::database::manager::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Pokemon {0} could not be found")]
    PokemonNotFound(i64),
    #[error("No pokemon of type '{0}'")]
    PokemonTypeNotFound(String),
    #[error("Review {0} could not be found")]
    ReviewNotFound(i64),
    #[error("Review {review_id} does not belong to pokemon {pokemon_id}")]
    ReviewNotOwned { review_id: i64, pokemon_id: i64 },
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

fn require_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("'{}' must not be empty", field)));
    }
    Ok(())
}
