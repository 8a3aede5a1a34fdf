//! Implementations behind the CLI commands, one module each.

pub mod migrate;
pub mod serve;
