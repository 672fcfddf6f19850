//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::RepositoryError;
use domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Stored normalized (trimmed, lower-cased)
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: String,
    #[sea_orm(unique)]
    pub employee_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// A role outside the enum means the row was written around the schema
/// check; it is surfaced rather than coerced.
impl TryFrom<Model> for User {
    type Error = RepositoryError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            tracing::warn!(user_id = %model.id, role = %model.role, "stored role not recognised");
            RepositoryError::Unknown(format!("stored role '{}' is not recognised", model.role))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            phone: model.phone,
            role,
            employee_id: model.employee_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
