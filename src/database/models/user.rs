use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role assigned to self-registered accounts
pub const ROLE_USER: &str = "USER";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// bcrypt hash, never the plain password
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}
