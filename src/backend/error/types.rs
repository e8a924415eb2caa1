/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised directly by handlers:
 * - Missing or invalid credentials
 * - Missing entities
 * - Ownership checks
 *
 * ## Ledger Errors
 *
 * Friendship rule violations (self friendship, duplicate friendship),
 * reported as 409 Conflict.
 *
 * ## Store Errors
 *
 * Storage failures. Conflicts become 409; everything else is a 500 whose
 * details are logged but not returned to the client.
 *
 * ## Extractor Rejections
 *
 * Malformed JSON bodies, query strings and path segments keep axum's status
 * code (400, 415 or 422) and its message, but use the same JSON body.
 */

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::shared::error::{SharedError, StoreError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use tostar::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("USER_NOT_FOUND", "User not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid credentials, missing entity)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Machine-readable error code
        code: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Friendship rule violation
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Input validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Token issuance failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        let code = match status {
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::FORBIDDEN => "FORBIDDEN",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::CONFLICT => "CONFLICT",
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
            StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
            _ => "INTERNAL_SERVER_ERROR",
        };
        Self::HandlerError {
            status,
            code,
            message: message.into(),
        }
    }

    /// 404 with a specific error code
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status: StatusCode::NOT_FOUND,
            code,
            message: message.into(),
        }
    }

    /// 409 with a specific error code
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status: StatusCode::CONFLICT,
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Ledger` - 409, or 404 for a missing friendship, 500 for storage failures
    /// - `Store` - 409 for conflicts, 500 otherwise
    /// - `SharedError` - 400 Bad Request
    /// - `Token`, `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Ledger(err) if err.is_duplicate() => StatusCode::CONFLICT,
            Self::Ledger(err) => match err {
                LedgerError::RelationshipNotFound { .. } => StatusCode::NOT_FOUND,
                LedgerError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::CONFLICT,
            },
            Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Token(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::HandlerError { code, .. } => *code,
            Self::Ledger(err) if err.is_duplicate() => "FRIEND_ALREADY_EXISTS",
            Self::Ledger(err) => match err {
                LedgerError::SelfRelationship(_) => "SELF_FRIEND_REQUEST_NOT_ALLOWED",
                LedgerError::RelationshipNotFound { .. } => "FRIENDSHIP_NOT_FOUND",
                LedgerError::Store(StoreError::Database(_)) => "INTERNAL_SERVER_ERROR",
                _ => "CONFLICT",
            },
            Self::Store(StoreError::Conflict(_)) => "CONFLICT",
            Self::Store(StoreError::Database(_)) => "INTERNAL_SERVER_ERROR",
            Self::SharedError(_) => "BAD_REQUEST",
            Self::Token(_) | Self::PasswordHash(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures get a generic message; their details only go to
    /// the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Ledger(LedgerError::Store(StoreError::Database(_)))
            | Self::Store(StoreError::Database(_))
            | Self::Token(_)
            | Self::PasswordHash(_) => "Internal server error".to_string(),
            Self::Ledger(LedgerError::StoreConflict { lower, higher }) => {
                format!("Users {} and {} are already friends", lower, higher)
            }
            Self::Ledger(err) => err.to_string(),
            Self::Store(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}
