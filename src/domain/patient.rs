//! Patient domain model
//!
//! This module defines the Patient record and its builder.

use super::ids::PatientId;
use std::fmt;

/// A registered patient
///
/// Medical history is an append-only sequence of free-text entries;
/// duplicates are allowed and order is preserved. Callers outside the store
/// only ever see the history as a read-only slice.
///
/// # Examples
///
/// ```
/// use cura::domain::patient::Patient;
/// use cura::domain::ids::PatientId;
///
/// let patient = Patient::builder()
///     .id(PatientId::new(1).unwrap())
///     .name("Jane Doe")
///     .age(34)
///     .gender("F")
///     .medical_history(vec!["diabetes".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(patient.age(), 34);
/// assert_eq!(patient.history(), ["diabetes"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    gender: String,
    medical_history: Vec<String>,
}

impl Patient {
    /// Creates a new builder for constructing a Patient
    pub fn builder() -> PatientBuilder {
        PatientBuilder::default()
    }

    /// Returns the patient identifier
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Returns the patient name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patient age in years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the recorded gender
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Returns a read-only view of the medical history
    pub fn history(&self) -> &[String] {
        &self.medical_history
    }

    /// Appends an entry to the medical history
    ///
    /// Entries are never removed or rewritten; duplicates are allowed.
    pub fn record_history(&mut self, entry: impl Into<String>) {
        self.medical_history.push(entry.into());
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient [ID: {}, Name: {}, Age: {}, Gender: {}, Medical History: [{}]]",
            self.id,
            self.name,
            self.age,
            self.gender,
            self.medical_history.join("; ")
        )
    }
}

/// Builder for constructing Patient instances
///
/// Validates the raw age at build time; the identifier is validated by
/// [`PatientId`] before it reaches the builder.
#[derive(Debug, Default)]
pub struct PatientBuilder {
    id: Option<PatientId>,
    name: Option<String>,
    age: Option<i64>,
    gender: Option<String>,
    medical_history: Vec<String>,
}

impl PatientBuilder {
    /// Creates a new PatientBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the patient identifier
    pub fn id(mut self, id: PatientId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the patient name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the raw age; negative values are rejected at build time
    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the recorded gender
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the initial medical history
    pub fn medical_history(mut self, history: Vec<String>) -> Self {
        self.medical_history = history;
        self
    }

    /// Builds the Patient
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the age is
    /// negative or out of range
    pub fn build(self) -> Result<Patient, String> {
        let age = self.age.ok_or("age is required")?;
        if age < 0 {
            return Err(format!("age must be non-negative, got {age}"));
        }
        let age = u32::try_from(age).map_err(|_| format!("age out of range: {age}"))?;
        Ok(Patient {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            age,
            gender: self.gender.ok_or("gender is required")?,
            medical_history: self.medical_history,
        })
    }
}
