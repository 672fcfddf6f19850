//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Repository and application error types, and the mapping between them
//! - The `{message}` HTTP error body
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{duplicate_field, AppError, AppResult, ErrorResponse, RepositoryError};
