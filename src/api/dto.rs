//! Transfer objects exchanged over HTTP, kept separate from the stored rows.

use serde::{Deserialize, Serialize};

use crate::database::models::pokemon::{NewPokemon, Pokemon};
use crate::database::models::review::{NewReview, Review};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PokemonDto {
    /// Ignored on input
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
}

impl PokemonDto {
    pub fn new(name: impl Into<String>, pokemon_type: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            pokemon_type: pokemon_type.into(),
        }
    }
}

impl From<Pokemon> for PokemonDto {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            pokemon_type: pokemon.pokemon_type,
        }
    }
}

impl From<PokemonDto> for NewPokemon {
    fn from(dto: PokemonDto) -> Self {
        Self {
            name: dto.name,
            pokemon_type: dto.pokemon_type,
        }
    }
}

/// One page of the pokemon listing. Pages are zero-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonResponse {
    pub content: Vec<PokemonDto>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub stars: i32,
    /// Owning pokemon; taken from the path, never from the body
    #[serde(default)]
    pub pokemon_id: i64,
}

impl ReviewDto {
    pub fn new(title: impl Into<String>, content: impl Into<String>, stars: i32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            stars,
            ..Default::default()
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            title: review.title,
            content: review.content,
            stars: review.stars,
            pokemon_id: review.pokemon_id,
        }
    }
}

impl From<ReviewDto> for NewReview {
    fn from(dto: ReviewDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            stars: dto.stars,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pokemon_dto_uses_type_key() {
        let value = serde_json::to_value(PokemonDto {
            id: 1,
            name: "pikachu".to_string(),
            pokemon_type: "electric".to_string(),
        })
        .unwrap();

        assert_eq!(value, json!({ "id": 1, "name": "pikachu", "type": "electric" }));
    }

    #[test]
    fn review_dto_accepts_body_without_ids() {
        let dto: ReviewDto =
            serde_json::from_value(json!({ "title": "title", "content": "content", "stars": 5 })).unwrap();

        assert_eq!(dto, ReviewDto::new("title", "content", 5));
        assert_eq!(
            serde_json::to_value(&dto).unwrap()["pokemonId"],
            json!(0)
        );
    }

    #[test]
    fn page_response_is_camel_case() {
        let page = PokemonResponse {
            content: vec![],
            page_no: 0,
            page_size: 10,
            total_elements: 0,
            total_pages: 0,
            last: true,
        };
        let value = serde_json::to_value(page).unwrap();

        assert_eq!(value["pageNo"], json!(0));
        assert_eq!(value["totalElements"], json!(0));
        assert_eq!(value["last"], json!(true));
    }
}
