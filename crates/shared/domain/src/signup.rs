//! Signup request validation and normalization.
//!
//! Rules are checked in a fixed precedence and the first violation wins:
//! presence, email shape, password strength. Parsing the body is the
//! transport's job and happens before any of this.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::ValidateLength;

use crate::constants::{MIN_PASSWORD_LENGTH, ROLE_USER};
use crate::error::SignupError;
use crate::password::PlainPassword;

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Raw signup body as sent by the client.
///
/// Every field is optional so that an absent field is reported as a missing
/// field instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: Option<String>,
    /// At least 6 characters
    #[cfg_attr(feature = "openapi", schema(example = "secret1", min_length = 6))]
    pub password: Option<String>,
    pub phone: Option<String>,
    /// One of `user`, `partner`, `admin`; defaults to `user`
    #[cfg_attr(feature = "openapi", schema(example = "user"))]
    pub role: Option<String>,
    pub employee_id: Option<String>,
}

/// Validated, normalized signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: PlainPassword,
    pub phone: Option<String>,
    pub role: String,
    pub employee_id: Option<String>,
}

impl SignupPayload {
    /// Validate and normalize, reporting the first violated rule.
    pub fn validate(self) -> Result<SignupRequest, SignupError> {
        let name = trimmed(self.name);
        let email = trimmed(self.email);

        let (name, email, password) = match (name, email, self.password) {
            (None, _, _) => return Err(SignupError::MissingField("name")),
            (_, None, _) => return Err(SignupError::MissingField("email")),
            (_, _, None) => return Err(SignupError::MissingField("password")),
            (_, _, Some(p)) if p.is_empty() => {
                return Err(SignupError::MissingField("password"))
            }
            (Some(n), Some(e), Some(p)) => (n, e, p),
        };

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(SignupError::InvalidEmail);
        }

        if !password.validate_length(Some(MIN_PASSWORD_LENGTH as u64), None, None) {
            return Err(SignupError::WeakPassword);
        }

        Ok(SignupRequest {
            name,
            email: email.to_lowercase(),
            password: PlainPassword::new(password),
            phone: trimmed(self.phone),
            role: self.role.unwrap_or_else(|| ROLE_USER.to_string()),
            employee_id: trimmed(self.employee_id),
        })
    }
}

/// Trim, treating blank as absent.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
