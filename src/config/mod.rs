//! Configuration management
//!
//! TOML-backed configuration with `${VAR}` environment substitution and
//! `CURA_*` overrides. See [`schema::CuraConfig`] for the file layout.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{ApplicationConfig, CuraConfig, DataConfig, LoggingConfig};
