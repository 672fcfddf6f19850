//! Service layer - signup use case.

mod signup_service;

pub use signup_service::{SignupManager, SignupService};
