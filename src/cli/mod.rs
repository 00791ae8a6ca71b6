//! Command-line front end

pub mod commands;
pub mod config;

pub use commands::*;
pub use config::{ConfigError, NetworkConfig};
