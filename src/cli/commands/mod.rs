//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod history;
pub mod init;
pub mod report;
pub mod schedule;
pub mod validate;

use crate::config::{load_config, CuraConfig};
use crate::store::{IngestReport, RecordStore};

/// Loads the configuration and the record store for a command
///
/// Prints a diagnostic and returns `None` when the configuration cannot be
/// loaded; the caller should exit with the configuration error code.
pub(crate) fn load_store(config_path: &str) -> Option<(CuraConfig, RecordStore, IngestReport)> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return None;
        }
    };
    let (store, report) = RecordStore::load(&config.data);
    for failure in &report.failed_sources {
        println!("⚠️  {failure}");
    }
    Some((config, store, report))
}
