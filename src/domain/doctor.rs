//! Doctor domain model
//!
//! Doctors carry a specialization tag resolved from free-text input. The
//! original system modeled specializations as subclasses; none of them adds
//! behavior beyond the tag, so a tagged enum is enough here.

use super::ids::DoctorId;
use std::fmt;

/// Doctor specialization tag
///
/// Resolved case-insensitively from the raw specialization string.
/// Unrecognized input falls back to [`Specialization::General`], retaining
/// the original string.
///
/// # Examples
///
/// ```
/// use cura::domain::doctor::Specialization;
///
/// assert_eq!(Specialization::resolve("CARDIOLOGIST"), Specialization::Cardiologist);
/// assert_eq!(
///     Specialization::resolve("Dermatologist"),
///     Specialization::General("Dermatologist".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specialization {
    /// Heart specialist
    Cardiologist,
    /// Children's specialist
    Paediatrician,
    /// Any other specialization, carrying the raw input string
    General(String),
}

impl Specialization {
    /// Resolves a specialization from a raw string, case-insensitively
    pub fn resolve(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_lowercase().as_str() {
            "cardiologist" => Specialization::Cardiologist,
            "paediatrician" => Specialization::Paediatrician,
            _ => Specialization::General(raw.to_string()),
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specialization::Cardiologist => write!(f, "Cardiologist"),
            Specialization::Paediatrician => write!(f, "Paediatrician"),
            Specialization::General(raw) => write!(f, "{raw}"),
        }
    }
}

/// A registered doctor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialization: Specialization,
}

impl Doctor {
    /// Creates a new Doctor
    pub fn new(id: DoctorId, name: impl Into<String>, specialization: Specialization) -> Self {
        Self {
            id,
            name: name.into(),
            specialization,
        }
    }

    /// Returns the doctor identifier
    pub fn id(&self) -> DoctorId {
        self.id
    }

    /// Returns the doctor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the specialization tag
    pub fn specialization(&self) -> &Specialization {
        &self.specialization
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor [ID: {}, Name: {}, Specialization: {}]",
            self.id, self.name, self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("cardiologist", Specialization::Cardiologist; "lowercase cardiologist")]
    #[test_case("Cardiologist", Specialization::Cardiologist; "capitalized cardiologist")]
    #[test_case("CARDIOLOGIST", Specialization::Cardiologist; "uppercase cardiologist")]
    #[test_case("paediatrician", Specialization::Paediatrician; "lowercase paediatrician")]
    #[test_case("PaedIatrician", Specialization::Paediatrician; "mixed case paediatrician")]
    fn test_specialization_resolution(raw: &str, expected: Specialization) {
        assert_eq!(Specialization::resolve(raw), expected);
    }

    #[test]
    fn test_unrecognized_specialization_retains_raw_string() {
        let spec = Specialization::resolve("Oncologist");
        assert_eq!(spec, Specialization::General("Oncologist".to_string()));
        assert_eq!(spec.to_string(), "Oncologist");
    }

    #[test]
    fn test_unrecognized_specialization_is_trimmed() {
        let spec = Specialization::resolve(" Dermatologist ");
        assert_eq!(spec, Specialization::General("Dermatologist".to_string()));
        assert_eq!(spec.to_string(), "Dermatologist");
    }

    #[test]
    fn test_doctor_display_single_line() {
        let doctor = Doctor::new(
            DoctorId::new(2).unwrap(),
            "John Smith",
            Specialization::Cardiologist,
        );
        assert_eq!(
            doctor.to_string(),
            "Doctor [ID: 2, Name: John Smith, Specialization: Cardiologist]"
        );
    }

    #[test]
    fn test_doctor_accessors() {
        let doctor = Doctor::new(
            DoctorId::new(3).unwrap(),
            "Ada Okafor",
            Specialization::resolve("Paediatrician"),
        );
        assert_eq!(doctor.id().value(), 3);
        assert_eq!(doctor.name(), "Ada Okafor");
        assert_eq!(*doctor.specialization(), Specialization::Paediatrician);
    }
}
