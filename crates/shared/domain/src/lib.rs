//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user record, the signup validator and password hashing.

pub mod constants;
pub mod error;
pub mod password;
pub mod signup;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult, SignupError};
pub use password::{Password, PlainPassword};
pub use signup::{SignupPayload, SignupRequest};
pub use user::{NewUser, User, UserResponse, UserRole};
