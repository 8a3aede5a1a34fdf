//! API layer - HTTP handlers, sessions and views
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Session cookie management
//! - HTML view rendering
//! - Route definitions

pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::AppState;
