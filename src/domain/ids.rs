//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for record identifiers. Each type
//! ensures type safety (a patient id cannot be passed where a doctor id is
//! expected) and validates that identifiers are positive.

use std::fmt;
use std::str::FromStr;

/// Patient identifier newtype wrapper
///
/// Identifiers are positive integers assigned by the clinic. Uniqueness is
/// a convention of the data, not enforced here.
///
/// # Examples
///
/// ```
/// use cura::domain::ids::PatientId;
///
/// let id = PatientId::new(1).unwrap();
/// assert_eq!(id.value(), 1);
/// assert!(PatientId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientId(u32);

impl PatientId {
    /// Creates a new PatientId from a raw integer
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or out of range
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("patient ID must be positive, got {id}"));
        }
        let id = u32::try_from(id).map_err(|_| format!("patient ID out of range: {id}"))?;
        Ok(Self(id))
    }

    /// Returns the numeric value of the identifier
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid patient ID: {s:?}"))?;
        Self::new(raw)
    }
}

/// Doctor identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoctorId(u32);

impl DoctorId {
    /// Creates a new DoctorId from a raw integer
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or out of range
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("doctor ID must be positive, got {id}"));
        }
        let id = u32::try_from(id).map_err(|_| format!("doctor ID out of range: {id}"))?;
        Ok(Self(id))
    }

    /// Returns the numeric value of the identifier
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DoctorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid doctor ID: {s:?}"))?;
        Self::new(raw)
    }
}

/// Appointment identifier newtype wrapper
///
/// Assigned by the store as collection-size + 1 at schedule time, or taken
/// verbatim from an ingested row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(u32);

impl AppointmentId {
    /// Creates a new AppointmentId from a raw integer
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or out of range
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("appointment ID must be positive, got {id}"));
        }
        let id = u32::try_from(id).map_err(|_| format!("appointment ID out of range: {id}"))?;
        Ok(Self(id))
    }

    /// Returns the numeric value of the identifier
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid appointment ID: {s:?}"))?;
        Self::new(raw)
    }
}
