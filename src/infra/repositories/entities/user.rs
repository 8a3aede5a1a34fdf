//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Role, User};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub field: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// The role column is written exclusively through `Role`, so a token that
/// fails to parse means the row was tampered with outside the application.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|_| {
            AppError::internal(format!(
                "user {} carries unknown role {:?}",
                model.id, model.role
            ))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            field: model.field,
            company: model.company,
            bio: model.bio,
        })
    }
}
