//! Error taxonomy shared by all stores.
//!
//! Every store operation fails with one of these kinds; the HTTP layer maps
//! them 1:1 onto status codes (400/404/409/500).

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        StoreError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        StoreError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        StoreError::Conflict(msg.into())
    }

    /// Translates a unique-constraint violation into a Conflict carrying
    /// `msg`; any other database error passes through unchanged. Uniqueness
    /// is enforced by the schema, so this is the only Conflict source for
    /// duplicate names.
    pub fn on_unique_violation(err: sqlx::Error, msg: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(msg.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}
