use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub stars: i32,
    pub pokemon_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub stars: i32,
}
