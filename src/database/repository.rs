use sqlx::{sqlite::SqliteRow, FromRow, SqlitePool};

use crate::database::manager::DatabaseError;

/// A row type stored in a single table with an integer `id` primary key
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
}

/// Generic CRUD over one table. Typed repositories wrap this and add the
/// inserts, updates and lookups specific to their entity.
pub struct Repository<T> {
    pool: SqlitePool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn select_page(&self, limit: i64, offset: i64) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY id LIMIT ? OFFSET ?", T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn select_one(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Returns the number of rows removed; zero is not an error
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
