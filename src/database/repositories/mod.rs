//! Repository interfaces used by the services, plus their SQLite-backed
//! implementations built on the generic [`Repository`](super::Repository).

pub mod pokemon;
pub mod review;
pub mod user;

pub use pokemon::{PokemonRepository, SqlPokemonRepository};
pub use review::{ReviewRepository, SqlReviewRepository};
pub use user::{SqlUserRepository, UserRepository};
