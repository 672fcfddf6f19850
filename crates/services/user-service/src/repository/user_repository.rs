//! User repository trait and its Postgres implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::user;
use super::entities::{UserActiveModel, UserEntity};
use super::schema;
use common::RepositoryError;
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepositoryError>;

/// User repository trait for dependency injection.
///
/// Implementations own password hashing and email uniqueness. Emails passed
/// in are expected to be normalized already.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check whether a user with this email exists
    async fn exists_by_email(&self, email: &str) -> RepoResult<bool>;

    /// Validate, hash and insert a new user
    async fn create(&self, user: NewUser) -> RepoResult<User>;
}

/// Postgres-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, new_user: NewUser) -> RepoResult<User> {
        let role = schema::check(&new_user)?;
        let password_hash = new_user
            .password
            .hash()
            .map_err(|e| RepositoryError::Unknown(e.to_string()))?;

        let now = Utc::now();
        let active_model = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(password_hash.into_string()),
            phone: Set(new_user.phone),
            role: Set(role.to_string()),
            employee_id: Set(new_user.employee_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        User::try_from(model)
    }
}
