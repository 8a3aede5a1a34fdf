//! Authentication service - registration and credential verification.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Argon2 digest that can never verify; used to equalize the cost of
/// login attempts against unknown emails.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with a hashed password
    async fn register(&self, user: NewUser, password: &str) -> AppResult<User>;

    /// Verify credentials and return the matching user
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService over the user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, user: NewUser, password: &str) -> AppResult<User> {
        // Pre-check for a friendlier error; the UNIQUE index still backs
        // this up against concurrent registrations.
        if self.users.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(password)?.into_string();
        self.users.create(user, password_hash).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let found = self.users.find_by_email(email).await?;

        // SECURITY: Verify against a dummy digest when the email is unknown
        // so both failure paths cost one argon2 verification and stay
        // indistinguishable from the outside.
        let stored = match &found {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.to_string()),
        };
        let password_valid = stored.verify(password);

        match found {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
