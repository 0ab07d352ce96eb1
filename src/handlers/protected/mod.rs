// handlers/protected/mod.rs - routes behind the bearer token check
pub mod pokemon;
pub mod review;
