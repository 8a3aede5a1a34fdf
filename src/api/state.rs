//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::api::views::Views;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, RequestLedger, UserStore};
use crate::services::{Authenticator, AuthService, MentorshipManager, MentorshipService};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization; `new()` lets tests
/// inject their own service implementations.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Mentorship service
    pub mentorship_service: Arc<dyn MentorshipService>,
    /// Compiled page templates
    pub views: Arc<Views>,
    /// Database connection
    pub database: Arc<Database>,
    /// Key the session cookie is encrypted with
    cookie_key: Key,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let users: Arc<UserStore> = Arc::new(UserStore::new(database.get_connection()));
        let requests = Arc::new(RequestLedger::new(database.get_connection()));

        Ok(Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            mentorship_service: Arc::new(MentorshipManager::new(users, requests)),
            views: Arc::new(Views::from_dir(&config.templates_dir)?),
            database,
            cookie_key: Key::derive_from(config.session_secret_bytes()),
        })
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        mentorship_service: Arc<dyn MentorshipService>,
        views: Arc<Views>,
        database: Arc<Database>,
        cookie_key: Key,
    ) -> Self {
        Self {
            auth_service,
            mentorship_service,
            views,
            database,
            cookie_key,
        }
    }
}

// Lets the private cookie jar extractor pull its key out of the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
