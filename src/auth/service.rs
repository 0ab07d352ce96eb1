use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::password::{self, PasswordError};
use super::{JwtError, JwtKeys};
use crate::database::manager::DatabaseError;
use crate::database::models::user::{User, ROLE_USER};
use crate::database::repositories::UserRepository;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Username is taken!")]
    UsernameTaken(String),
    #[error("{0}")]
    InvalidToken(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Jwt(#[from] JwtError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Identity attached to an authenticated request
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

/// Login response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
}

impl AuthToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer ".to_string(),
        }
    }
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    keys: JwtKeys,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, keys: JwtKeys, bcrypt_cost: u32) -> Self {
        Self {
            users,
            keys,
            bcrypt_cost,
        }
    }

    /// Create a `USER` account with a hashed password
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("Username and password are required".to_string()));
        }

        if self.users.exists_by_username(username).await? {
            warn!("Registration rejected, username '{}' already exists", username);
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let hash = password::hash_password(password, self.bcrypt_cost).await?;
        // A concurrent registration can still win the race past the check above
        let user = match self.users.save(username, &hash, ROLE_USER).await {
            Ok(user) => user,
            Err(e) if e.is_unique_violation() => {
                warn!("Registration rejected, username '{}' was taken concurrently", username);
                return Err(AuthError::UsernameTaken(username.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        info!("Registered user '{}' ({})", user.username, user.id);
        Ok(user)
    }

    /// Verify credentials and issue a signed token
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken, AuthError> {
        let Some(user) = self.users.find_by_username(username.trim()).await? else {
            warn!("Login failed: unknown user '{}'", username);
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_password(password, &user.password).await? {
            warn!("Login failed: bad password for '{}'", user.username);
            return Err(AuthError::InvalidCredentials);
        }

        let claims = self.keys.claims_for(&user.username, user.id, &user.role);
        let token = self.keys.generate(&claims)?;

        info!("User '{}' logged in", user.username);
        Ok(AuthToken::bearer(token))
    }

    /// Validate a bearer token and resolve the user it names
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError> {
        let claims = self.keys.validate(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user = self
            .users
            .find_by_id(claims.user_id)
            .await?
            .filter(|user| user.username == claims.sub)
            .ok_or_else(|| AuthError::InvalidToken(format!("User '{}' no longer exists", claims.sub)))?;

        debug!("Token accepted for '{}' with role {}", user.username, user.role);
        Ok(user.into())
    }
}
