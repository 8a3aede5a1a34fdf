//! Alumnet - A student/alumni mentorship web application
//!
//! Students browse an alumni directory and send mentorship requests;
//! alumni accept or reject the requests addressed to them. Pages are
//! server-rendered and the session lives in an encrypted cookie.
//!
//! # Layout
//!
//! - **cli** / **commands**: clap surface and the code behind each command
//! - **config**: environment settings and constants
//! - **domain**: users, roles, passwords, mentorship requests
//! - **services**: registration, login, and request/response use cases
//! - **infra**: sea-orm database handle, migrations, repositories
//! - **api**: router, handlers, session cookie, handlebars views
//! - **errors**: the application error type and its HTTP mapping
//!
//! # Running
//!
//! ```bash
//! cargo run -- serve --port 3000
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{MentorshipRequest, Password, RequestStatus, Role, SessionUser, User};
pub use errors::{AppError, AppResult};
