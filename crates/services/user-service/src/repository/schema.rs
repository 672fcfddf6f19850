//! Storage schema rules for user records.
//!
//! Checked by every repository implementation before a record is written.
//! Unlike the signup validator, all violations are collected and reported
//! together.

use once_cell::sync::Lazy;
use regex::Regex;

use common::RepositoryError;
use domain::{
    NewUser, UserRole, MAX_EMPLOYEE_ID_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
    MIN_PHONE_LENGTH, VALID_ROLES,
};

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("phone pattern is valid"));

/// Check `user` against the schema, returning its typed role on success.
pub fn check(user: &NewUser) -> Result<UserRole, RepositoryError> {
    let mut messages = Vec::new();

    if user.name.chars().count() > MAX_NAME_LENGTH {
        messages.push(format!(
            "Name cannot exceed {} characters",
            MAX_NAME_LENGTH
        ));
    }

    if let Some(phone) = &user.phone {
        let len = phone.chars().count();
        if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&len) || !PHONE_CHARS.is_match(phone) {
            messages.push("Please provide a valid phone number".to_string());
        }
    }

    let role = UserRole::parse(&user.role);
    if role.is_none() {
        messages.push(format!(
            "{} is not a valid role (expected one of: {})",
            user.role,
            VALID_ROLES.join(", ")
        ));
    }

    if let Some(employee_id) = &user.employee_id {
        if employee_id.chars().count() > MAX_EMPLOYEE_ID_LENGTH {
            messages.push(format!(
                "Employee ID cannot exceed {} characters",
                MAX_EMPLOYEE_ID_LENGTH
            ));
        }
    }

    match role {
        Some(role) if messages.is_empty() => Ok(role),
        _ => Err(RepositoryError::schema(messages)),
    }
}
