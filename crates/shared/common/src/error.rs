//! Unified error handling.
//!
//! Repository failures are classified into [`RepositoryError`] at the storage
//! boundary, then mapped together with validation faults into [`AppError`],
//! which renders as `{"message": ...}` with a 400 or 500 status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{SignupError, MSG_UNEXPECTED, MSG_USER_EXISTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by a user repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Storage-layer uniqueness violation on `field` (API field name)
    #[error("{field} already exists")]
    DuplicateKey { field: String },

    /// Record rejected by the storage schema; all violations, in field order
    #[error("{}", .messages.join(", "))]
    SchemaValidation { messages: Vec<String> },

    #[error("{0}")]
    ConnectionFailure(String),

    #[error("{0}")]
    Unknown(String),
}

impl RepositoryError {
    pub fn duplicate(field: impl Into<String>) -> Self {
        RepositoryError::DuplicateKey {
            field: field.into(),
        }
    }

    pub fn schema(messages: Vec<String>) -> Self {
        RepositoryError::SchemaValidation { messages }
    }
}

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            return RepositoryError::duplicate(duplicate_field(&message));
        }

        match err {
            DbErr::Conn(e) => RepositoryError::ConnectionFailure(e.to_string()),
            DbErr::ConnectionAcquire(e) => RepositoryError::ConnectionFailure(e.to_string()),
            other => RepositoryError::Unknown(other.to_string()),
        }
    }
}

/// Extract the API field name from a unique-violation message.
///
/// Postgres names single-column unique constraints `{table}_{column}_key`
/// and quotes the name in the message; the column becomes a camelCase field.
pub fn duplicate_field(message: &str) -> String {
    let constraint = message.split('"').nth(1).unwrap_or_default();
    let column = constraint
        .strip_prefix("users_")
        .and_then(|rest| rest.strip_suffix("_key"))
        .unwrap_or_default();

    if column.is_empty() {
        return "Record".to_string();
    }

    let mut field = String::with_capacity(column.len());
    let mut upper = false;
    for c in column.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            field.extend(c.to_uppercase());
            upper = false;
        } else {
            field.push(c);
        }
    }
    field
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input rejected by the signup validator
    #[error(transparent)]
    Signup(#[from] SignupError),

    /// Pre-check found an existing record for the email
    #[error("{}", MSG_USER_EXISTS)]
    UserExists,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Stable identifier used as the `kind` field in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Signup(e) => e.kind(),
            AppError::UserExists => "user_exists",
            AppError::Repository(RepositoryError::DuplicateKey { .. }) => "duplicate_key",
            AppError::Repository(RepositoryError::SchemaValidation { .. }) => "schema_validation",
            AppError::Repository(RepositoryError::ConnectionFailure(_)) => "connection_failure",
            AppError::Repository(RepositoryError::Unknown(_)) => "unknown_failure",
            AppError::Internal(_) => "internal",
        }
    }

    /// Conflicting or offending field, when one is known
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Signup(e) => e.field(),
            AppError::UserExists => Some("email"),
            AppError::Repository(RepositoryError::DuplicateKey { field }) => Some(field),
            _ => None,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Signup(_) | AppError::UserExists => StatusCode::BAD_REQUEST,
            AppError::Repository(
                RepositoryError::DuplicateKey { .. } | RepositoryError::SchemaValidation { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Repository(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Repository(
                RepositoryError::ConnectionFailure(detail) | RepositoryError::Unknown(detail),
            ) => format!("Database operation failed: {}", detail),
            AppError::Internal(_) => MSG_UNEXPECTED.to_string(),
            _ => self.to_string(),
        }
    }

    fn log(&self, message: &str) {
        let detail = match self {
            AppError::Internal(cause) | AppError::Signup(SignupError::MalformedInput(cause)) => {
                Some(cause.as_str())
            }
            _ => None,
        };

        if self.status().is_server_error() {
            tracing::error!(
                kind = self.kind(),
                field = self.field(),
                reason = %message,
                detail,
                "request failed"
            );
        } else {
            tracing::warn!(
                kind = self.kind(),
                field = self.field(),
                reason = %message,
                detail,
                "request rejected"
            );
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        self.log(&message);

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
