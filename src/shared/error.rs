//! Shared Error Types
//!
//! Error types used by both the storage layer and the HTTP layer.
//!
//! # Error Categories
//!
//! - `SharedError` - input validation failures, raised before anything is persisted
//! - `StoreError` - failures reported by a storage backend (Postgres or in-memory)
//!
//! # Usage
//!
//! ```rust
//! use tostar::shared::error::SharedError;
//!
//! let error = SharedError::validation("pet_name", "Pet name must not be blank");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Validation errors raised while checking request input
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors reported by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness rule rejected the write
    ///
    /// Raised atomically by the backend, so two concurrent writers of the
    /// same key can never both succeed.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return Self::Conflict(constraint);
            }
        }
        Self::Database(err)
    }
}
