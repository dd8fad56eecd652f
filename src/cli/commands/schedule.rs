//! Schedule command implementation
//!
//! Loads the configured data files, schedules a new appointment, and
//! displays the result. The store is in-memory only, so the scheduled
//! appointment lives for this invocation; the command exists to validate
//! and preview scheduling against the current data files.

use super::load_store;
use crate::domain::{DoctorId, PatientId};
use crate::render;
use clap::Args;

/// Arguments for the schedule command
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Patient ID
    #[arg(long)]
    pub patient: i64,

    /// Doctor ID
    #[arg(long)]
    pub doctor: i64,

    /// Appointment date (lexicographically sortable, e.g. 2024-10-01)
    #[arg(long)]
    pub date: String,
}

impl ScheduleArgs {
    /// Execute the schedule command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(
            patient_id = self.patient,
            doctor_id = self.doctor,
            date = %self.date,
            "Scheduling appointment"
        );

        let Some((_config, mut store, _report)) = load_store(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        let (patient_id, doctor_id) =
            match (PatientId::new(self.patient), DoctorId::new(self.doctor)) {
                (Ok(p), Ok(d)) => (p, d),
                (Err(e), _) | (_, Err(e)) => {
                    println!("❌ {e}");
                    return Ok(3); // Invalid input exit code
                }
            };

        match store.schedule_appointment(patient_id, doctor_id, &self.date) {
            Ok(id) => {
                println!(
                    "✅ Appointment scheduled for Patient ID {patient_id} with Doctor ID {doctor_id}"
                );
                println!();
                let scheduled: Vec<_> = store
                    .appointments()
                    .iter()
                    .filter(|a| a.id() == id)
                    .collect();
                print!("{}", render::listing(&scheduled));
                Ok(0)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(3)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_missing_config_is_config_error() {
        let args = ScheduleArgs {
            patient: 1,
            doctor: 2,
            date: "2024-10-01".to_string(),
        };
        let code = args.execute("/nonexistent/cura.toml").unwrap();
        assert_eq!(code, 2);
    }
}
