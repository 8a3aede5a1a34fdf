//! User repository - credential store persistence.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::ROLE_ALUMNI;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the email UNIQUE constraint surfaces as
    /// `AppError::DuplicateEmail`.
    async fn create(&self, user: NewUser, password_hash: String) -> AppResult<User>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List all alumni in registration order (the student-facing directory)
    async fn list_alumni(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over SeaORM
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
    async fn create(&self, user: NewUser, password_hash: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(password_hash),
            role: Set(user.role.to_string()),
            field: Set(user.field),
            company: Set(user.company),
            bio: Set(user.bio),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => model.try_into(),
            // A violated UNIQUE index can only be the email column; the
            // failed statement leaves no partial row behind.
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::DuplicateEmail),
                _ => Err(AppError::from(err)),
            },
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn list_alumni(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Role.eq(ROLE_ALUMNI))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }
}
