use std::sync::Arc;

use tracing::{info, warn};

use super::{require_text, ServiceError};
use crate::api::dto::ReviewDto;
use crate::database::models::review::Review;
use crate::database::repositories::{PokemonRepository, ReviewRepository};

const MIN_STARS: i32 = 1;
const MAX_STARS: i32 = 5;

pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    pokemon: Arc<dyn PokemonRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, pokemon: Arc<dyn PokemonRepository>) -> Self {
        Self { reviews, pokemon }
    }

    pub async fn create_review(&self, pokemon_id: i64, dto: ReviewDto) -> Result<ReviewDto, ServiceError> {
        validate(&dto)?;

        // The foreign key decides whether the pokemon exists at insert time
        let saved = match self.reviews.save(pokemon_id, dto.into()).await {
            Ok(saved) => saved,
            Err(e) if e.is_foreign_key_violation() => {
                return Err(ServiceError::PokemonNotFound(pokemon_id));
            }
            Err(e) => return Err(e.into()),
        };
        info!("Created review {} for pokemon {}", saved.id, pokemon_id);
        Ok(saved.into())
    }

    /// Empty when the pokemon has no reviews or does not exist
    pub async fn get_reviews_by_pokemon_id(&self, pokemon_id: i64) -> Result<Vec<ReviewDto>, ServiceError> {
        let reviews = self.reviews.find_by_pokemon_id(pokemon_id).await?;
        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    pub async fn get_review_by_id(&self, pokemon_id: i64, review_id: i64) -> Result<ReviewDto, ServiceError> {
        Ok(self.owned_review(pokemon_id, review_id).await?.into())
    }

    pub async fn update_review(
        &self,
        pokemon_id: i64,
        review_id: i64,
        dto: ReviewDto,
    ) -> Result<ReviewDto, ServiceError> {
        validate(&dto)?;
        self.owned_review(pokemon_id, review_id).await?;

        let updated = self
            .reviews
            .update(review_id, dto.into())
            .await?
            .ok_or(ServiceError::ReviewNotFound(review_id))?;
        info!("Updated review {} of pokemon {}", review_id, pokemon_id);
        Ok(updated.into())
    }

    pub async fn delete_review(&self, pokemon_id: i64, review_id: i64) -> Result<(), ServiceError> {
        self.owned_review(pokemon_id, review_id).await?;
        self.reviews.delete_by_id(review_id).await?;
        info!("Deleted review {} of pokemon {}", review_id, pokemon_id);
        Ok(())
    }

    async fn require_pokemon(&self, pokemon_id: i64) -> Result<(), ServiceError> {
        if self.pokemon.exists_by_id(pokemon_id).await? {
            Ok(())
        } else {
            Err(ServiceError::PokemonNotFound(pokemon_id))
        }
    }

    /// Loads the review and checks it hangs off the pokemon named in the path
    async fn owned_review(&self, pokemon_id: i64, review_id: i64) -> Result<Review, ServiceError> {
        self.require_pokemon(pokemon_id).await?;

        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or(ServiceError::ReviewNotFound(review_id))?;

        if review.pokemon_id != pokemon_id {
            warn!(
                "Review {} belongs to pokemon {}, not {}",
                review_id, review.pokemon_id, pokemon_id
            );
            return Err(ServiceError::ReviewNotOwned { review_id, pokemon_id });
        }

        Ok(review)
    }
}

fn validate(dto: &ReviewDto) -> Result<(), ServiceError> {
    require_text("title", &dto.title)?;
    if !(MIN_STARS..=MAX_STARS).contains(&dto.stars) {
        return Err(ServiceError::Validation(format!(
            "'stars' must be between {} and {}",
            MIN_STARS, MAX_STARS
        )));
    }
    Ok(())
}
