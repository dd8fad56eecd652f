//! The record store
//!
//! This module holds the three record collections (patients, doctors,
//! appointments) and every query/mutation operation over them. The store is
//! an explicitly constructed value passed to each operation; there is no
//! hidden global. All operations are synchronous linear scans over small
//! lists, which is the intended scale.
//!
//! Registration and scheduling confirmations are emitted as `tracing`
//! events; human-facing output is the render layer's job.

pub mod summary;

pub use summary::{IngestReport, IngestSummary};

use crate::config::schema::DataConfig;
use crate::domain::{
    Appointment, AppointmentId, CuraError, Doctor, DoctorId, Patient, PatientId, Result,
    Specialization, Status,
};
use crate::ingest::{self, Row};

/// In-memory store of patient, doctor, and appointment records
///
/// # Examples
///
/// ```
/// use cura::store::RecordStore;
///
/// # fn example() -> cura::domain::Result<()> {
/// let mut store = RecordStore::new();
/// store.register_patient(1, "Jane Doe", 34, "F", vec!["diabetes".to_string()])?;
/// store.register_doctor(2, "John Smith", "Cardiologist")?;
///
/// let id = store.schedule_appointment(
///     store.patients()[0].id(),
///     store.doctors()[0].id(),
///     "2024-10-01",
/// )?;
/// store.complete_appointment(id)?;
/// assert_eq!(store.completed_appointments().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from the configured delimited sources
    ///
    /// Each source is ingested independently: a file that cannot be read is
    /// recorded in the report and the remaining sources are still loaded.
    /// Malformed rows are skipped and counted, never fatal.
    pub fn load(data: &DataConfig) -> (Self, IngestReport) {
        let mut store = Self::new();
        let mut report = IngestReport::new();

        match ingest::read_rows(&data.patients_file) {
            Ok(rows) => report.patients = store.ingest_patients(&rows),
            Err(e) => {
                tracing::error!(source = %data.patients_file, error = %e, "Skipping source");
                report.record_failed_source(e.to_string());
            }
        }
        match ingest::read_rows(&data.doctors_file) {
            Ok(rows) => report.doctors = store.ingest_doctors(&rows),
            Err(e) => {
                tracing::error!(source = %data.doctors_file, error = %e, "Skipping source");
                report.record_failed_source(e.to_string());
            }
        }
        match ingest::read_rows(&data.appointments_file) {
            Ok(rows) => report.appointments = store.ingest_appointments(&rows),
            Err(e) => {
                tracing::error!(source = %data.appointments_file, error = %e, "Skipping source");
                report.record_failed_source(e.to_string());
            }
        }

        tracing::info!(
            patients = store.patients.len(),
            doctors = store.doctors.len(),
            appointments = store.appointments.len(),
            "Record store loaded"
        );
        (store, report)
    }

    // ---- Registration ----

    /// Registers a new patient
    ///
    /// Duplicate identifiers are not rejected; lookups return the first
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::Construction`] if the identifier is not
    /// positive or the age is negative.
    pub fn register_patient(
        &mut self,
        id: i64,
        name: &str,
        age: i64,
        gender: &str,
        medical_history: Vec<String>,
    ) -> Result<()> {
        let patient = Patient::builder()
            .id(PatientId::new(id).map_err(CuraError::Construction)?)
            .name(name)
            .age(age)
            .gender(gender)
            .medical_history(medical_history)
            .build()
            .map_err(CuraError::Construction)?;
        tracing::info!(patient_id = %patient.id(), name = %patient.name(), "Patient registered");
        self.patients.push(patient);
        Ok(())
    }

    /// Registers a new doctor
    ///
    /// The specialization is resolved case-insensitively; unrecognized
    /// input yields a general specialization retaining the raw string.
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::Construction`] if the identifier is not
    /// positive.
    pub fn register_doctor(&mut self, id: i64, name: &str, specialization: &str) -> Result<()> {
        let doctor = Doctor::new(
            DoctorId::new(id).map_err(CuraError::Construction)?,
            name,
            Specialization::resolve(specialization),
        );
        tracing::info!(doctor_id = %doctor.id(), name = %doctor.name(), "Doctor registered");
        self.doctors.push(doctor);
        Ok(())
    }

    // ---- Ingestion ----

    /// Ingests tokenized patient rows
    ///
    /// A malformed row (wrong field count, non-numeric id or age) is logged
    /// with its line number, counted as skipped, and ingestion continues.
    pub fn ingest_patients(&mut self, rows: &[Row]) -> IngestSummary {
        let mut summary = IngestSummary::new();
        for row in rows {
            match patient_from_row(row) {
                Ok(patient) => {
                    self.patients.push(patient);
                    summary.record_loaded();
                }
                Err(e) => {
                    tracing::warn!(line = row.line, error = %e, "Skipping malformed patient row");
                    summary.record_skipped();
                }
            }
        }
        summary
    }

    /// Ingests tokenized doctor rows
    pub fn ingest_doctors(&mut self, rows: &[Row]) -> IngestSummary {
        let mut summary = IngestSummary::new();
        for row in rows {
            match doctor_from_row(row) {
                Ok(doctor) => {
                    self.doctors.push(doctor);
                    summary.record_loaded();
                }
                Err(e) => {
                    tracing::warn!(line = row.line, error = %e, "Skipping malformed doctor row");
                    summary.record_skipped();
                }
            }
        }
        summary
    }

    /// Ingests tokenized appointment rows
    ///
    /// Unrecognized status tokens make a row malformed.
    pub fn ingest_appointments(&mut self, rows: &[Row]) -> IngestSummary {
        let mut summary = IngestSummary::new();
        for row in rows {
            match appointment_from_row(row) {
                Ok(appointment) => {
                    self.appointments.push(appointment);
                    summary.record_loaded();
                }
                Err(e) => {
                    tracing::warn!(line = row.line, error = %e, "Skipping malformed appointment row");
                    summary.record_skipped();
                }
            }
        }
        summary
    }

    // ---- Sorting ----

    /// Sorts patients ascending by age; ties keep prior relative order
    pub fn sort_patients_by_age(&mut self) {
        self.patients.sort_by_key(|patient| patient.age());
    }

    /// Sorts appointments ascending by lexicographic date string; ties keep
    /// prior relative order
    pub fn sort_appointments_by_date(&mut self) {
        self.appointments
            .sort_by(|a, b| a.date().cmp(b.date()));
    }

    // ---- Scheduling ----

    /// Schedules a new appointment with status Booked
    ///
    /// The identifier is assigned as the current appointment count plus
    /// one. Records are never removed in scope, so this stays unique within
    /// one store.
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if either identifier does not
    /// resolve to an existing record; the appointment collection is left
    /// unchanged.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: &str,
    ) -> Result<AppointmentId> {
        if self.patient(patient_id).is_none() {
            return Err(CuraError::InvalidInput(format!(
                "no patient with ID {patient_id}"
            )));
        }
        if self.doctor(doctor_id).is_none() {
            return Err(CuraError::InvalidInput(format!(
                "no doctor with ID {doctor_id}"
            )));
        }
        let id = AppointmentId::new(self.appointments.len() as i64 + 1)
            .map_err(CuraError::Construction)?;
        self.appointments
            .push(Appointment::new(id, patient_id, doctor_id, date, Status::Booked));
        tracing::info!(
            appointment_id = %id,
            patient_id = %patient_id,
            doctor_id = %doctor_id,
            date = %date,
            "Appointment scheduled"
        );
        Ok(id)
    }

    /// Marks an appointment as canceled
    ///
    /// The transition is unguarded.
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if the appointment is not found.
    pub fn cancel_appointment(&mut self, id: AppointmentId) -> Result<()> {
        let appointment = self.appointment_mut(id)?;
        appointment.set_status(Status::Canceled);
        tracing::info!(appointment_id = %id, "Appointment canceled");
        Ok(())
    }

    /// Marks an appointment as completed
    ///
    /// The transition is unguarded, including completing a canceled
    /// appointment.
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if the appointment is not found.
    pub fn complete_appointment(&mut self, id: AppointmentId) -> Result<()> {
        let appointment = self.appointment_mut(id)?;
        appointment.set_status(Status::Completed);
        tracing::info!(appointment_id = %id, "Appointment completed");
        Ok(())
    }

    // ---- Patient records ----

    /// Returns a patient's medical history as a read-only view
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if the patient is not found.
    pub fn medical_history(&self, patient_id: PatientId) -> Result<&[String]> {
        self.patient(patient_id)
            .map(Patient::history)
            .ok_or_else(|| CuraError::InvalidInput(format!("no patient with ID {patient_id}")))
    }

    /// Appends a vitals note to a patient's medical history
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if the patient is not found.
    pub fn update_vitals(&mut self, patient_id: PatientId, note: &str) -> Result<()> {
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id() == patient_id)
            .ok_or_else(|| CuraError::InvalidInput(format!("no patient with ID {patient_id}")))?;
        patient.record_history(note);
        tracing::info!(patient_id = %patient_id, "Vitals recorded");
        Ok(())
    }

    // ---- Views ----

    /// Returns all appointments for the given doctor, in store order
    ///
    /// # Errors
    ///
    /// Returns [`CuraError::InvalidInput`] if the doctor is not found.
    pub fn appointments_for_doctor(&self, doctor_id: DoctorId) -> Result<Vec<&Appointment>> {
        if self.doctor(doctor_id).is_none() {
            return Err(CuraError::InvalidInput(format!(
                "no doctor with ID {doctor_id}"
            )));
        }
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.doctor_id() == doctor_id)
            .collect())
    }

    /// Returns all completed appointments, in store order
    pub fn completed_appointments(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status() == Status::Completed)
            .collect()
    }

    /// Looks up a patient by identifier (first match)
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    /// Looks up a doctor by identifier (first match)
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// Returns the patient collection, in store order
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Returns the doctor collection, in store order
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Returns the appointment collection, in store order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn appointment_mut(&mut self, id: AppointmentId) -> Result<&mut Appointment> {
        self.appointments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| CuraError::InvalidInput(format!("no appointment with ID {id}")))
    }
}

fn expect_fields(row: &Row, expected: usize) -> std::result::Result<(), String> {
    if row.fields.len() != expected {
        return Err(format!(
            "expected {expected} fields, got {}",
            row.fields.len()
        ));
    }
    Ok(())
}

fn patient_from_row(row: &Row) -> std::result::Result<Patient, String> {
    expect_fields(row, 5)?;
    let id: PatientId = row.fields[0].parse()?;
    let age: i64 = row.fields[2]
        .parse()
        .map_err(|_| format!("invalid age: {:?}", row.fields[2]))?;
    Patient::builder()
        .id(id)
        .name(row.fields[1].clone())
        .age(age)
        .gender(row.fields[3].clone())
        .medical_history(ingest::split_bracket_list(&row.fields[4]))
        .build()
}

fn doctor_from_row(row: &Row) -> std::result::Result<Doctor, String> {
    expect_fields(row, 3)?;
    let id: DoctorId = row.fields[0].parse()?;
    Ok(Doctor::new(
        id,
        row.fields[1].clone(),
        Specialization::resolve(&row.fields[2]),
    ))
}

fn appointment_from_row(row: &Row) -> std::result::Result<Appointment, String> {
    expect_fields(row, 5)?;
    let id: AppointmentId = row.fields[0].parse()?;
    let patient_id: PatientId = row.fields[1].parse()?;
    let doctor_id: DoctorId = row.fields[2].parse()?;
    let status: Status = row.fields[4].parse()?;
    Ok(Appointment::new(
        id,
        patient_id,
        doctor_id,
        row.fields[3].clone(),
        status,
    ))
}
