//! Presentation adapter
//!
//! Renders entities and collections for the display surface. Every entity
//! already knows how to render itself as a single line via `Display`; this
//! module assembles those lines into listings, optionally preceded by a
//! section header.

use std::fmt::Display;

/// Renders a collection as one line per entity under a section header
///
/// An empty collection renders the header followed by `(none)`.
pub fn section<T: Display>(header: &str, items: &[T]) -> String {
    let mut out = String::from(header);
    out.push('\n');
    out.push_str(&listing(items));
    out
}

/// Renders a collection as one line per entity, no header
pub fn listing<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "(none)\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out
}

/// Renders a patient's medical history as a single line
pub fn history_line(patient_id: impl Display, entries: &[String]) -> String {
    format!(
        "Medical History for Patient ID {}: [{}]",
        patient_id,
        entries.join("; ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Doctor, DoctorId, Specialization};

    fn doctors() -> Vec<Doctor> {
        vec![
            Doctor::new(DoctorId::new(2).unwrap(), "John Smith", Specialization::Cardiologist),
            Doctor::new(
                DoctorId::new(3).unwrap(),
                "Ada Okafor",
                Specialization::Paediatrician,
            ),
        ]
    }

    #[test]
    fn test_listing_one_line_per_entity() {
        let out = listing(&doctors());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Doctor [ID: 2"));
        assert!(lines[1].starts_with("Doctor [ID: 3"));
    }

    #[test]
    fn test_section_prepends_header() {
        let out = section("Doctors:", &doctors());
        assert!(out.starts_with("Doctors:\n"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_empty_listing() {
        let out = listing::<Doctor>(&[]);
        assert_eq!(out, "(none)\n");
    }

    #[test]
    fn test_history_line() {
        let entries = vec!["diabetes".to_string(), "hypertension".to_string()];
        assert_eq!(
            history_line(1, &entries),
            "Medical History for Patient ID 1: [diabetes; hypertension]"
        );
    }
}
