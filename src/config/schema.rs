//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `cura.toml` file.

use serde::{Deserialize, Serialize};

/// Main Cura configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuraConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Delimited data sources to ingest
    pub data: DataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CuraConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name cannot be empty".to_string());
        }
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "application.log_level must be one of trace, debug, info, warn, error; got {other:?}"
            )),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Paths to the delimited data sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Patients source: `id,name,age,gender,history`
    pub patients_file: String,

    /// Doctors source: `id,name,specialization`
    pub doctors_file: String,

    /// Appointments source: `id,patientId,doctorId,date,status`
    pub appointments_file: String,
}

impl DataConfig {
    fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("data.patients_file", &self.patients_file),
            ("data.doctors_file", &self.doctors_file),
            ("data.appointments_file", &self.appointments_file),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{key} cannot be empty"));
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable rotating file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }
        match self.local_rotation.to_lowercase().as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "logging.local_rotation must be daily or hourly; got {other:?}"
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
