//! User Service Library
//!
//! The user repository (Postgres and in-memory), its storage schema, and the
//! signup use case built on top of it. The HTTP layer lives in `gateway`.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use common::DatabaseConfig;

use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::service::{SignupManager, SignupService};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    InMemory,
}

/// Build the signup service on the chosen storage backend.
///
/// Postgres connects and applies pending migrations first.
pub async fn build_signup_service(
    storage: Storage,
    config: &DatabaseConfig,
) -> Result<Arc<dyn SignupService>, DbErr> {
    let repo: Arc<dyn UserRepository> = match storage {
        Storage::Postgres => {
            let db = Database::connect(config).await?;
            Arc::new(UserStore::new(db.get_connection()))
        }
        Storage::InMemory => {
            info!("Using in-memory user store; data is lost on exit");
            Arc::new(InMemoryUserStore::new())
        }
    };

    Ok(Arc::new(SignupManager::new(repo)))
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
