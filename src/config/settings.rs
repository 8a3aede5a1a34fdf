//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_TEMPLATES_DIR, MIN_SESSION_SECRET_LENGTH};

/// Application configuration. The listen address is not here: host and
/// port belong to the `serve` arguments.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    session_secret: String,
    pub templates_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("templates_dir", &self.templates_dir)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if SESSION_SECRET is not set or is too short (security
    /// requirement; the cookie key is derived from it).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("SESSION_SECRET environment variable must be set in production");
            }
        });

        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            panic!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            );
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            session_secret,
            templates_dir: env::var("TEMPLATES_DIR")
                .unwrap_or_else(|_| DEFAULT_TEMPLATES_DIR.to_string()),
        }
    }

    /// Get session secret bytes for cookie key derivation.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }
}
