//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over SeaORM

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{RequestLedger, RequestRepository, UserRepository, UserStore};
