use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::review::Review;

/// Persisted pokemon row. `reviews` is the owning side of the relationship
/// and is only populated by repository lookups that load it explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub pokemon_type: String,
    #[sqlx(skip)]
    pub reviews: Vec<Review>,
}

/// Column values for insert/update; the id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewPokemon {
    pub name: String,
    pub pokemon_type: String,
}
