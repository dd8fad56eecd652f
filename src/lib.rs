// Cura - Clinical Records Tracking Tool
// Copyright (c) 2025 Cura Contributors
// Licensed under the MIT License

//! # Cura - Clinical Records Tracking
//!
//! Cura is a small clinical tracking tool that manages patient, doctor, and
//! appointment records: registering entities, loading them from delimited
//! text files, scheduling/cancelling/completing appointments, and producing
//! sorted and filtered views.
//!
//! ## Architecture
//!
//! Cura follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`store`] - The record store and all query/mutation operations
//! - [`ingest`] - Delimited-file ingestion adapter
//! - [`render`] - Presentation adapter for display output
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use cura::domain::Result;
//! use cura::store::RecordStore;
//!
//! fn main() -> Result<()> {
//!     let mut store = RecordStore::new();
//!     store.register_patient(1, "Jane Doe", 34, "F", vec!["diabetes".to_string()])?;
//!     store.register_doctor(2, "John Smith", "Cardiologist")?;
//!
//!     let appointment = store.schedule_appointment(
//!         store.patients()[0].id(),
//!         store.doctors()[0].id(),
//!         "2024-10-01",
//!     )?;
//!     store.complete_appointment(appointment)?;
//!
//!     println!("{} completed", store.completed_appointments().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Everything is single-threaded and synchronous: the store is a plain
//! value of three ordered collections, every operation is a linear scan
//! running to completion, and there is no suspension point anywhere. A
//! concurrent port would need a single coarse lock around the store, since
//! sorts and appends both mutate collection structure.
//!
//! ## Error Handling
//!
//! Cura uses the [`domain::CuraError`] type for all errors:
//!
//! ```rust
//! use cura::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cura::config::load_config("cura.toml")?;
//!     # let _ = config;
//!     Ok(())
//! }
//! # // The file does not exist in doc tests; just check it compiles.
//! # assert!(example().is_err());
//! ```
//!
//! ## Logging
//!
//! Cura uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Loading records");
//! warn!(line = 3, "Skipping malformed patient row");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod logging;
pub mod render;
pub mod store;
