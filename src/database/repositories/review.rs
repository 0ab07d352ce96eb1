use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::review::{NewReview, Review};
use crate::database::repository::{Entity, Repository};

impl Entity for Review {
    const TABLE: &'static str = "review";
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn save(&self, pokemon_id: i64, review: NewReview) -> Result<Review, DatabaseError>;

    async fn update(&self, id: i64, review: NewReview) -> Result<Option<Review>, DatabaseError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DatabaseError>;

    async fn find_by_pokemon_id(&self, pokemon_id: i64) -> Result<Vec<Review>, DatabaseError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}

#[derive(Clone)]
pub struct SqlReviewRepository {
    table: Repository<Review>,
}

impl SqlReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            table: Repository::new(pool),
        }
    }
}

#[async_trait]
impl ReviewRepository for SqlReviewRepository {
    async fn save(&self, pokemon_id: i64, review: NewReview) -> Result<Review, DatabaseError> {
        let saved = sqlx::query_as::<_, Review>(
            "INSERT INTO review (title, content, stars, pokemon_id) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.stars)
        .bind(pokemon_id)
        .fetch_one(self.table.pool())
        .await?;

        Ok(saved)
    }

    async fn update(&self, id: i64, review: NewReview) -> Result<Option<Review>, DatabaseError> {
        let updated = sqlx::query_as::<_, Review>(
            "UPDATE review SET title = ?, content = ?, stars = ? WHERE id = ? RETURNING *",
        )
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.stars)
        .bind(id)
        .fetch_optional(self.table.pool())
        .await?;

        Ok(updated)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DatabaseError> {
        self.table.select_one(id).await
    }

    async fn find_by_pokemon_id(&self, pokemon_id: i64) -> Result<Vec<Review>, DatabaseError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM review WHERE pokemon_id = ? ORDER BY id",
        )
        .bind(pokemon_id)
        .fetch_all(self.table.pool())
        .await?;

        Ok(reviews)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        self.table.delete_by_id(id).await?;
        Ok(())
    }
}
