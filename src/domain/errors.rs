//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Cura error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum CuraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record could not be constructed (invalid identifier or age)
    ///
    /// Fatal only to that single construction; callers at the
    /// registration/ingestion boundary report it and continue.
    #[error("Invalid record: {0}")]
    Construction(String),

    /// An operation referenced an identifier that does not exist
    ///
    /// The store is left unchanged when this is returned.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An ingestion source could not be read
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CuraError {
    fn from(err: std::io::Error) -> Self {
        CuraError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CuraError {
    fn from(err: toml::de::Error) -> Self {
        CuraError::Configuration(format!("TOML parse error: {err}"))
    }
}
