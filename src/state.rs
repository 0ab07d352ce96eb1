use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{AuthService, JwtError, JwtKeys};
use crate::config::AppConfig;
use crate::database::repositories::{SqlPokemonRepository, SqlReviewRepository, SqlUserRepository};
use crate::services::{PokemonService, ReviewService};

/// Services shared by every handler, wired once at startup
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<AuthService>,
    pub pokemon: Arc<PokemonService>,
    pub reviews: Arc<ReviewService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Result<Self, JwtError> {
        let keys = JwtKeys::from_config(&config.security)?;

        let users = Arc::new(SqlUserRepository::new(pool.clone()));
        let pokemon = Arc::new(SqlPokemonRepository::new(pool.clone()));
        let reviews = Arc::new(SqlReviewRepository::new(pool.clone()));

        Ok(Self {
            auth: Arc::new(AuthService::new(users, keys, config.security.bcrypt_cost)),
            pokemon: Arc::new(PokemonService::new(pokemon.clone(), &config.api)),
            reviews: Arc::new(ReviewService::new(reviews, pokemon)),
            pool,
        })
    }
}
