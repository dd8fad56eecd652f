//! Logging and observability
//!
//! Structured logging via `tracing`: console output by default, optional
//! rotating JSON file output.
//!
//! # Example
//!
//! ```no_run
//! use cura::logging::init_logging;
//! use cura::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
