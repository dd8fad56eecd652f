//! Integration tests for flat-file ingestion
//!
//! These write real files with `tempfile` and drive the full ingestion
//! path: tokenizing, per-row construction, partial success on malformed
//! rows, and the per-source failure behavior of `RecordStore::load`.

use cura::config::DataConfig;
use cura::ingest;
use cura::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn malformed_row_is_skipped_and_valid_rows_keep_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "patients.csv",
        "id,name,age,gender,history\n\
         1,Jane Doe,34,F,[diabetes;hypertension]\n\
         2,Broken Row,not-a-number,F,[]\n\
         3,Amir Khan,29,M,[asthma]\n",
    );

    let rows = ingest::read_rows(&path).unwrap();
    let mut store = RecordStore::new();
    let summary = store.ingest_patients(&rows);

    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 1);
    let names: Vec<&str> = store.patients().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Jane Doe", "Amir Khan"]);
}

#[test]
fn patient_history_brackets_are_parsed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "patients.csv",
        "id,name,age,gender,history\n1,Jane Doe,34,F,[diabetes;hypertension]\n2,Amir Khan,29,M,[]\n",
    );

    let rows = ingest::read_rows(&path).unwrap();
    let mut store = RecordStore::new();
    store.ingest_patients(&rows);

    assert_eq!(store.patients()[0].history(), ["diabetes", "hypertension"]);
    assert!(store.patients()[1].history().is_empty());
}

#[test]
fn appointment_status_tokens_are_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "appointments.csv",
        "id,patientId,doctorId,date,status\n\
         1,1,2,2024-10-01,booked\n\
         2,1,2,2024-10-02,Completed\n\
         3,1,2,2024-10-03,CANCELED\n\
         4,1,2,2024-10-04,RESCHEDULED\n",
    );

    let rows = ingest::read_rows(&path).unwrap();
    let mut store = RecordStore::new();
    let summary = store.ingest_appointments(&rows);

    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(store.completed_appointments().len(), 1);
}

#[test]
fn doctor_specializations_resolve_during_ingestion() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "doctors.csv",
        "id,name,specialization\n2,John Smith,Cardiologist\n3,Sara Lindt,Dermatologist\n",
    );

    let rows = ingest::read_rows(&path).unwrap();
    let mut store = RecordStore::new();
    store.ingest_doctors(&rows);

    use cura::domain::Specialization;
    assert_eq!(*store.doctors()[0].specialization(), Specialization::Cardiologist);
    assert_eq!(
        *store.doctors()[1].specialization(),
        Specialization::General("Dermatologist".to_string())
    );
}

#[test]
fn load_continues_past_an_unreadable_source() {
    let dir = TempDir::new().unwrap();
    let doctors = write_file(&dir, "doctors.csv", "id,name,specialization\n2,John Smith,GP\n");
    let appointments = write_file(
        &dir,
        "appointments.csv",
        "id,patientId,doctorId,date,status\n1,1,2,2024-10-01,BOOKED\n",
    );
    let data = DataConfig {
        patients_file: dir
            .path()
            .join("missing.csv")
            .to_string_lossy()
            .into_owned(),
        doctors_file: doctors,
        appointments_file: appointments,
    };

    let (store, report) = RecordStore::load(&data);

    assert_eq!(report.failed_sources.len(), 1);
    assert!(store.patients().is_empty());
    assert_eq!(store.doctors().len(), 1);
    assert_eq!(store.appointments().len(), 1);
    assert!(!report.is_clean());
}

#[test]
fn load_reports_clean_ingestion() {
    let dir = TempDir::new().unwrap();
    let data = DataConfig {
        patients_file: write_file(
            &dir,
            "patients.csv",
            "id,name,age,gender,history\n1,Jane Doe,34,F,[diabetes]\n",
        ),
        doctors_file: write_file(&dir, "doctors.csv", "id,name,specialization\n2,John Smith,GP\n"),
        appointments_file: write_file(
            &dir,
            "appointments.csv",
            "id,patientId,doctorId,date,status\n1,1,2,2024-10-01,BOOKED\n",
        ),
    };

    let (store, report) = RecordStore::load(&data);

    assert!(report.is_clean());
    assert_eq!(report.patients.loaded, 1);
    assert_eq!(report.doctors.loaded, 1);
    assert_eq!(report.appointments.loaded, 1);
    assert_eq!(store.appointments()[0].date(), "2024-10-01");
}

#[test]
fn scheduling_after_ingestion_continues_from_collection_size() {
    let dir = TempDir::new().unwrap();
    let data = DataConfig {
        patients_file: write_file(
            &dir,
            "patients.csv",
            "id,name,age,gender,history\n1,Jane Doe,34,F,[]\n",
        ),
        doctors_file: write_file(&dir, "doctors.csv", "id,name,specialization\n2,John Smith,GP\n"),
        appointments_file: write_file(
            &dir,
            "appointments.csv",
            "id,patientId,doctorId,date,status\n1,1,2,2024-10-01,BOOKED\n1,1,2,2024-10-02,BOOKED\n",
        ),
    };

    let (mut store, _report) = RecordStore::load(&data);
    let id = store
        .schedule_appointment(
            store.patients()[0].id(),
            store.doctors()[0].id(),
            "2024-11-01",
        )
        .unwrap();
    // count + 1, regardless of the ids already in the file
    assert_eq!(id.value(), 3);
}
