//! Ingestion summary and reporting
//!
//! This module defines structures for tracking and reporting ingestion
//! results: how many rows became records, how many were skipped, and which
//! sources could not be read at all.

use std::fmt;

/// Summary of ingesting one source into one collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Number of rows that became records
    pub loaded: usize,

    /// Number of malformed rows that were skipped
    pub skipped: usize,
}

impl IngestSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row that became a record
    pub fn record_loaded(&mut self) {
        self.loaded += 1;
    }

    /// Record a malformed row that was skipped
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Total number of rows seen
    pub fn total(&self) -> usize {
        self.loaded + self.skipped
    }
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} loaded, {} skipped", self.loaded, self.skipped)
    }
}

/// Report of loading all configured sources into a store
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Patients source summary
    pub patients: IngestSummary,

    /// Doctors source summary
    pub doctors: IngestSummary,

    /// Appointments source summary
    pub appointments: IngestSummary,

    /// Sources that could not be read; each aborts only its own ingestion
    pub failed_sources: Vec<String>,
}

impl IngestReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a source that could not be read
    pub fn record_failed_source(&mut self, message: impl Into<String>) {
        self.failed_sources.push(message.into());
    }

    /// True when every source was read and no row was skipped
    pub fn is_clean(&self) -> bool {
        self.failed_sources.is_empty()
            && self.patients.skipped == 0
            && self.doctors.skipped == 0
            && self.appointments.skipped == 0
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "patients: {}; doctors: {}; appointments: {}",
            self.patients, self.doctors, self.appointments
        )?;
        if !self.failed_sources.is_empty() {
            write!(f, "; {} source(s) unreadable", self.failed_sources.len())?;
        }
        Ok(())
    }
}
