//! Environment-driven settings plus application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
