use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::user::User;
use crate::database::repository::{Entity, Repository};

impl Entity for User {
    const TABLE: &'static str = "users";
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `password_hash` must already be hashed
    async fn save(&self, username: &str, password_hash: &str, role: &str) -> Result<User, DatabaseError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, DatabaseError>;
}

#[derive(Clone)]
pub struct SqlUserRepository {
    table: Repository<User>,
}

impl SqlUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            table: Repository::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn save(&self, username: &str, password_hash: &str, role: &str) -> Result<User, DatabaseError> {
        let saved = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, role) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.table.pool())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        self.table.select_one(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.table.pool())
            .await?;

        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(self.table.pool())
            .await?;

        Ok(count > 0)
    }
}
