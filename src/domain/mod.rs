//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod password;
pub mod request;
pub mod user;

pub use password::Password;
pub use request::{MentorshipRequest, RequestStatus, RequestWithCounterpart};
pub use user::{NewUser, Role, SessionUser, User};
