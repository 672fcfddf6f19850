//! Signup service - validate-then-persist orchestration.
//!
//! Takes an already validated request, runs the existence pre-check and a
//! single create attempt. Failures are returned as `AppError`; nothing is
//! retried.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::{NewUser, SignupRequest, User, ROLE_USER};

use crate::repository::UserRepository;

/// Signup service trait for dependency injection.
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a new user
    async fn signup(&self, request: SignupRequest) -> AppResult<User>;
}

/// Concrete implementation of SignupService using a repository.
pub struct SignupManager {
    repo: Arc<dyn UserRepository>,
}

impl SignupManager {
    /// Create new signup service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SignupService for SignupManager {
    async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        // Advisory only; the storage unique constraint decides under races
        if self.repo.exists_by_email(&request.email).await? {
            return Err(AppError::UserExists);
        }

        if request.role != ROLE_USER {
            debug!(role = %request.role, "non-default role requested at signup");
        }

        let user = self.repo.create(NewUser::from(request)).await?;
        info!(user_id = %user.id, role = %user.role, "user created");

        Ok(user)
    }
}
