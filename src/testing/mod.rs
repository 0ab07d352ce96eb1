//! Test helpers: throwaway in-memory databases and fully wired state

use axum::Router;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::state::AppState;

/// Development defaults with a fixed secret and the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database.url = "sqlite::memory:".to_string();
    config.security.jwt_secret = "test-secret".to_string();
    config.security.bcrypt_cost = 4;
    config
}

/// Fresh database with the schema applied; nothing is shared between calls
pub async fn memory_pool() -> SqlitePool {
    DatabaseManager::connect(&test_config().database)
        .await
        .expect("failed to open in-memory database")
}

pub async fn test_state() -> AppState {
    AppState::new(memory_pool().await, &test_config()).expect("failed to build app state")
}

pub async fn test_app() -> Router {
    let config = test_config();
    crate::app(test_state().await, &config.security)
}
