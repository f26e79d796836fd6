//! Configuration for the tfn tool
//!
//! Provides types, discovery, and loading for `tfn.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError, LoadedConfig};
pub use schema::*;
