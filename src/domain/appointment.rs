//! Appointment domain model
//!
//! Appointments reference patients and doctors by identifier only; the
//! store owns the records. The appointment date is a plain string expected
//! to sort lexicographically (ISO 8601 in practice).

use super::ids::{AppointmentId, DoctorId, PatientId};
use std::fmt;
use std::str::FromStr;

/// Appointment lifecycle status
///
/// Parsed case-insensitively from `BOOKED` / `COMPLETED` / `CANCELED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Scheduled and pending
    Booked,
    /// Visit took place
    Completed,
    /// Called off
    Canceled,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BOOKED" => Ok(Status::Booked),
            "COMPLETED" => Ok(Status::Completed),
            "CANCELED" => Ok(Status::Canceled),
            other => Err(format!("unrecognized status: {other:?}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Status::Booked => "BOOKED",
            Status::Completed => "COMPLETED",
            Status::Canceled => "CANCELED",
        };
        write!(f, "{tag}")
    }
}

/// A scheduled appointment
///
/// Status transitions are unguarded: `set_status` overwrites the current
/// status no matter what it is, including re-completing a canceled
/// appointment. This mirrors the system being tracked, which has no
/// guarded state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: AppointmentId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    date: String,
    status: Status,
}

impl Appointment {
    /// Creates a new Appointment
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            date: date.into(),
            status,
        }
    }

    /// Returns the appointment identifier
    pub fn id(&self) -> AppointmentId {
        self.id
    }

    /// Returns the referenced patient identifier
    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    /// Returns the referenced doctor identifier
    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    /// Returns the appointment date string
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the current status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Sets the status unconditionally
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment [ID: {}, Patient ID: {}, Doctor ID: {}, Date: {}, Status: {}]",
            self.id, self.patient_id, self.doctor_id, self.date, self.status
        )
    }
}
