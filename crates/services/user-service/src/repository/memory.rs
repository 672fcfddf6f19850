//! Process-local user store.
//!
//! Applies the same schema, hashing and uniqueness rules as the Postgres
//! store. Used by `serve --in-memory` and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::schema;
use super::user_repository::{RepoResult, UserRepository};
use common::RepositoryError;
use domain::{NewUser, User};

/// In-memory users keyed by normalized email.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self.users.read().await.contains_key(email))
    }

    async fn create(&self, new_user: NewUser) -> RepoResult<User> {
        let role = schema::check(&new_user)?;
        // Hash before taking the lock
        let password_hash = new_user
            .password
            .hash()
            .map_err(|e| RepositoryError::Unknown(e.to_string()))?;

        let mut users = self.users.write().await;

        if users.contains_key(&new_user.email) {
            return Err(RepositoryError::duplicate("email"));
        }
        if let Some(employee_id) = &new_user.employee_id {
            if users
                .values()
                .any(|u| u.employee_id.as_ref() == Some(employee_id))
            {
                return Err(RepositoryError::duplicate("employeeId"));
            }
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: password_hash.into_string(),
            phone: new_user.phone,
            role,
            employee_id: new_user.employee_id,
            created_at: now,
            updated_at: now,
        };

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
