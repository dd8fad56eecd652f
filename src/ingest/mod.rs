//! Ingestion adapter for delimited text sources
//!
//! This module reads the clinic's flat-file exports and tokenizes them into
//! rows for the record store. The format is comma-delimited with a header
//! line that is discarded:
//!
//! - Patients: `id,name,age,gender,history` where `history` is a
//!   semicolon-separated list in literal brackets, e.g.
//!   `1,Jane Doe,34,F,[diabetes;hypertension]`
//! - Doctors: `id,name,specialization`
//! - Appointments: `id,patientId,doctorId,date,status`
//!
//! The adapter only tokenizes; turning fields into typed records is the
//! store's job. Rows keep their source line number so malformed rows can be
//! reported precisely.

use crate::domain::{CuraError, Result};
use std::fs;
use std::path::Path;

/// A tokenized row from a delimited source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: usize,
    /// Comma-separated fields, in file order
    pub fields: Vec<String>,
}

/// Reads a delimited source file into tokenized rows
///
/// The first line is treated as a header and discarded. Blank lines are
/// skipped. Fields are split on commas and trimmed.
///
/// # Errors
///
/// Returns [`CuraError::Ingest`] if the file cannot be read. A read
/// failure aborts only this source.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        CuraError::Ingest(format!("failed to read {}: {}", path.display(), e))
    })?;

    let rows = contents
        .lines()
        .enumerate()
        .skip(1) // header
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Row {
            line: index + 1,
            fields: line.split(',').map(|field| field.trim().to_string()).collect(),
        })
        .collect();

    Ok(rows)
}

/// Splits a bracketed semicolon list into its entries
///
/// `[diabetes;hypertension]` becomes `["diabetes", "hypertension"]`. An
/// empty list `[]` yields no entries. Brackets are optional; a bare
/// semicolon list is accepted as-is.
pub fn split_bracket_list(field: &str) -> Vec<String> {
    let inner = field
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(';').map(|entry| entry.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_rows_skips_header() {
        let file = source("id,name,specialization\n2,John Smith,Cardiologist\n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].fields, ["2", "John Smith", "Cardiologist"]);
    }

    #[test]
    fn test_read_rows_preserves_file_order() {
        let file = source("id,name,specialization\n1,A,GP\n2,B,GP\n3,C,GP\n");
        let rows = read_rows(file.path()).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_read_rows_skips_blank_lines() {
        let file = source("id,name,specialization\n\n2,John Smith,Cardiologist\n\n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_read_rows_trims_fields() {
        let file = source("id,name\n 2 , John Smith \n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].fields, ["2", "John Smith"]);
    }

    #[test]
    fn test_read_rows_missing_file_fails() {
        let err = read_rows("/nonexistent/patients.csv").unwrap_err();
        assert!(matches!(err, CuraError::Ingest(_)));
    }

    #[test]
    fn test_split_bracket_list() {
        assert_eq!(
            split_bracket_list("[diabetes;hypertension]"),
            ["diabetes", "hypertension"]
        );
    }

    #[test]
    fn test_split_bracket_list_single_entry() {
        assert_eq!(split_bracket_list("[asthma]"), ["asthma"]);
    }

    #[test]
    fn test_split_bracket_list_empty() {
        assert!(split_bracket_list("[]").is_empty());
        assert!(split_bracket_list("").is_empty());
    }

    #[test]
    fn test_split_bracket_list_without_brackets() {
        assert_eq!(split_bracket_list("a;b"), ["a", "b"]);
    }
}
