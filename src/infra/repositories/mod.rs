//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod request_repository;
mod user_repository;

pub use request_repository::{RequestLedger, RequestRepository};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for the service unit tests
#[cfg(test)]
pub use request_repository::MockRequestRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
