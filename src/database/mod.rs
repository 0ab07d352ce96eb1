pub mod manager;
pub mod models;
pub mod repositories;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{Entity, Repository};
