//! User store. Accounts exist so gyms and sessions have an owner id;
//! there is no login or session management here.

use sqlx::SqlitePool;

use crate::db::models::{NewUser, User};
use crate::error::{StoreError, StoreResult};

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Stores a bcrypt hash of the password; the hash is never read back
    /// out of this store.
    pub async fn create_user(&self, user: &NewUser) -> StoreResult<User> {
        let email = user.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(StoreError::bad_request("A valid email is required"));
        }
        if user.password.is_empty() {
            return Err(StoreError::bad_request("Password is required"));
        }

        let password_hash = bcrypt::hash(&user.password, bcrypt::DEFAULT_COST)
            .map_err(|e| StoreError::Internal(format!("Failed to hash password: {}", e)))?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES (?1, ?2)
             RETURNING id, email, created_at, updated_at",
        )
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::on_unique_violation(e, "User with this email already exists"))
    }
}
