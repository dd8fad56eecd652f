//! Domain models and types for Cura.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`DoctorId`], [`AppointmentId`])
//! - **Domain models** ([`Patient`], [`Doctor`], [`Appointment`])
//! - **Error types** ([`CuraError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Cura uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use cura::domain::{DoctorId, PatientId};
//!
//! # fn example() -> std::result::Result<(), String> {
//! let patient_id = PatientId::new(1)?;
//! let doctor_id = DoctorId::new(2)?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: PatientId = doctor_id;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CuraError>`](Result). The
//! lowest-level constructors (identifiers, builders) return
//! `Result<_, String>`; the store converts those into [`CuraError`] at its
//! boundary.

pub mod appointment;
pub mod doctor;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use appointment::{Appointment, Status};
pub use doctor::{Doctor, Specialization};
pub use errors::CuraError;
pub use ids::{AppointmentId, DoctorId, PatientId};
pub use patient::{Patient, PatientBuilder};
pub use result::Result;
