//! Repository layer for data access.

pub mod entities;
mod memory;
pub mod schema;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use user_repository::{RepoResult, UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
