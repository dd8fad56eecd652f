//! History command implementation
//!
//! Shows a patient's medical history. With `--note`, a vitals note is
//! appended first so the displayed history reflects it.

use super::load_store;
use crate::domain::PatientId;
use crate::render;
use clap::Args;

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Patient ID
    #[arg(long)]
    pub patient: i64,

    /// Vitals note to append before displaying
    #[arg(long)]
    pub note: Option<String>,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(patient_id = self.patient, "Retrieving medical history");

        let Some((_config, mut store, _report)) = load_store(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        let patient_id = match PatientId::new(self.patient) {
            Ok(id) => id,
            Err(e) => {
                println!("❌ {e}");
                return Ok(3); // Invalid input exit code
            }
        };

        if let Some(note) = &self.note {
            if let Err(e) = store.update_vitals(patient_id, note) {
                println!("❌ {e}");
                return Ok(3);
            }
            println!("✅ Vitals recorded for Patient ID {patient_id}");
        }

        match store.medical_history(patient_id) {
            Ok(history) => {
                println!("{}", render::history_line(patient_id, history));
                Ok(0)
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(3)
            }
        }
    }
}
