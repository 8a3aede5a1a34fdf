//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod mentorship_service;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use mentorship_service::{MentorshipManager, MentorshipService};
