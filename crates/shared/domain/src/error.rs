//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Signup input faults, reported in validation precedence order.
///
/// The `Display` text is the message returned to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// Body is not a JSON object with correctly typed fields
    #[error("Invalid request body")]
    MalformedInput(String),

    /// One of name, email or password is absent or blank
    #[error("Please provide name, email and password")]
    MissingField(&'static str),

    /// Email does not look like `local@domain.tld`
    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    WeakPassword,
}

impl SignupError {
    /// Stable identifier used as the `kind` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SignupError::MalformedInput(_) => "malformed_input",
            SignupError::MissingField(_) => "missing_field",
            SignupError::InvalidEmail => "invalid_email",
            SignupError::WeakPassword => "weak_password",
        }
    }

    /// Offending field, when one is known.
    pub fn field(&self) -> Option<&str> {
        match self {
            SignupError::MissingField(field) => Some(field),
            SignupError::InvalidEmail => Some("email"),
            SignupError::WeakPassword => Some("password"),
            SignupError::MalformedInput(_) => None,
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Password-related errors
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
