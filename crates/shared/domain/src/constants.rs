//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Partner role (external collaborators, usually carrying an employee id)
pub const ROLE_PARTNER: &str = "partner";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_PARTNER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum stored name length
pub const MAX_NAME_LENGTH: usize = 100;

/// Phone length bounds (characters, after trimming)
pub const MIN_PHONE_LENGTH: usize = 7;
pub const MAX_PHONE_LENGTH: usize = 20;

/// Maximum stored employee id length
pub const MAX_EMPLOYEE_ID_LENGTH: usize = 64;

// =============================================================================
// Client messages
// =============================================================================

pub const MSG_SIGNUP_SUCCESS: &str = "User created successfully";

pub const MSG_USER_EXISTS: &str = "User with this email already exists";

pub const MSG_UNEXPECTED: &str = "An unexpected error occurred";
