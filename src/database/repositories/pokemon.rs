use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::pokemon::{NewPokemon, Pokemon};
use crate::database::models::review::Review;
use crate::database::repository::{Entity, Repository};

impl Entity for Pokemon {
    const TABLE: &'static str = "pokemon";
}

#[async_trait]
pub trait PokemonRepository: Send + Sync {
    async fn save(&self, pokemon: NewPokemon) -> Result<Pokemon, DatabaseError>;

    /// Returns `None` when no row has this id
    async fn update(&self, id: i64, pokemon: NewPokemon) -> Result<Option<Pokemon>, DatabaseError>;

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Pokemon>, DatabaseError>;

    async fn count(&self) -> Result<i64, DatabaseError>;

    /// Loads the pokemon together with its reviews
    async fn find_by_id(&self, id: i64) -> Result<Option<Pokemon>, DatabaseError>;

    /// Row check only, reviews are not loaded
    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    async fn find_by_type(&self, pokemon_type: &str) -> Result<Option<Pokemon>, DatabaseError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}

#[derive(Clone)]
pub struct SqlPokemonRepository {
    table: Repository<Pokemon>,
}

impl SqlPokemonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            table: Repository::new(pool),
        }
    }
}

#[async_trait]
impl PokemonRepository for SqlPokemonRepository {
    async fn save(&self, pokemon: NewPokemon) -> Result<Pokemon, DatabaseError> {
        let saved = sqlx::query_as::<_, Pokemon>(
            r#"INSERT INTO pokemon (name, "type") VALUES (?, ?) RETURNING *"#,
        )
        .bind(&pokemon.name)
        .bind(&pokemon.pokemon_type)
        .fetch_one(self.table.pool())
        .await?;

        Ok(saved)
    }

    async fn update(&self, id: i64, pokemon: NewPokemon) -> Result<Option<Pokemon>, DatabaseError> {
        let updated = sqlx::query_as::<_, Pokemon>(
            r#"UPDATE pokemon SET name = ?, "type" = ? WHERE id = ? RETURNING *"#,
        )
        .bind(&pokemon.name)
        .bind(&pokemon.pokemon_type)
        .bind(id)
        .fetch_optional(self.table.pool())
        .await?;

        Ok(updated)
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Pokemon>, DatabaseError> {
        self.table.select_page(limit, offset).await
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        self.table.count().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pokemon>, DatabaseError> {
        let Some(mut pokemon) = self.table.select_one(id).await? else {
            return Ok(None);
        };

        pokemon.reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM review WHERE pokemon_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(self.table.pool())
        .await?;

        Ok(Some(pokemon))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemon WHERE id = ?")
            .bind(id)
            .fetch_one(self.table.pool())
            .await?;

        Ok(count > 0)
    }

    async fn find_by_type(&self, pokemon_type: &str) -> Result<Option<Pokemon>, DatabaseError> {
        let found = sqlx::query_as::<_, Pokemon>(
            r#"SELECT * FROM pokemon WHERE "type" = ? ORDER BY id LIMIT 1"#,
        )
        .bind(pokemon_type)
        .fetch_optional(self.table.pool())
        .await?;

        Ok(found)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        // Reviews go with it through ON DELETE CASCADE
        self.table.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::review::NewReview;
    use crate::database::repositories::{ReviewRepository, SqlReviewRepository};
    use crate::testing::memory_pool;

    fn pikachu() -> NewPokemon {
        NewPokemon {
            name: "pikachu".to_string(),
            pokemon_type: "electric".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_id() {
        let repo = SqlPokemonRepository::new(memory_pool().await);

        let saved = repo.save(pikachu()).await.unwrap();

        assert!(saved.id > 0);
        assert_eq!(saved.name, "pikachu");
        assert_eq!(saved.pokemon_type, "electric");
    }

    #[tokio::test]
    async fn count_and_exists() {
        let repo = SqlPokemonRepository::new(memory_pool().await);
        let first = repo.save(pikachu()).await.unwrap();
        repo.save(pikachu()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.exists_by_id(first.id).await.unwrap());
        assert!(!repo.exists_by_id(first.id + 10).await.unwrap());
    }

    #[tokio::test]
    async fn find_page_applies_limit_and_offset() {
        let repo = SqlPokemonRepository::new(memory_pool().await);
        for _ in 0..5 {
            repo.save(pikachu()).await.unwrap();
        }

        let page = repo.find_page(2, 4).await.unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 5);
    }

    #[tokio::test]
    async fn find_by_type_returns_match() {
        let repo = SqlPokemonRepository::new(memory_pool().await);
        repo.save(pikachu()).await.unwrap();

        let found = repo.find_by_type("electric").await.unwrap();
        assert!(found.is_some());

        let missing = repo.find_by_type("water").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn update_changes_columns() {
        let repo = SqlPokemonRepository::new(memory_pool().await);
        let saved = repo.save(pikachu()).await.unwrap();

        let updated = repo
            .update(
                saved.id,
                NewPokemon {
                    name: "Raichu".to_string(),
                    pokemon_type: "Electric".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, "Raichu");
        assert_eq!(updated.pokemon_type, "Electric");
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let repo = SqlPokemonRepository::new(memory_pool().await);
        assert!(repo.update(42, pikachu()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_loads_reviews() {
        let pool = memory_pool().await;
        let repo = SqlPokemonRepository::new(pool.clone());
        let reviews = SqlReviewRepository::new(pool);
        let saved = repo.save(pikachu()).await.unwrap();
        reviews
            .save(
                saved.id,
                NewReview {
                    title: "title".to_string(),
                    content: "content".to_string(),
                    stars: 5,
                },
            )
            .await
            .unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();

        assert_eq!(found.reviews.len(), 1);
        assert_eq!(found.reviews[0].pokemon_id, saved.id);
    }

    #[tokio::test]
    async fn delete_removes_pokemon_and_reviews() {
        let pool = memory_pool().await;
        let repo = SqlPokemonRepository::new(pool.clone());
        let reviews = SqlReviewRepository::new(pool);
        let saved = repo.save(pikachu()).await.unwrap();
        let review = reviews
            .save(
                saved.id,
                NewReview {
                    title: "title".to_string(),
                    content: "content".to_string(),
                    stars: 3,
                },
            )
            .await
            .unwrap();

        repo.delete_by_id(saved.id).await.unwrap();

        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
        assert!(reviews.find_by_id(review.id).await.unwrap().is_none());
        // Deleting again is not an error
        repo.delete_by_id(saved.id).await.unwrap();
    }
}
