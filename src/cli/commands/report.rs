//! Report command implementation
//!
//! Loads the configured data files and displays sorted record listings:
//! patients by age, appointments by date, and optionally the completed or
//! per-doctor appointment views.

use super::load_store;
use crate::domain::DoctorId;
use crate::render;
use clap::Args;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Only show appointments for this doctor ID
    #[arg(long)]
    pub doctor: Option<i64>,

    /// Also show completed appointments
    #[arg(long)]
    pub completed: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Generating report");

        let Some((_config, mut store, report)) = load_store(config_path) else {
            return Ok(2); // Configuration error exit code
        };

        if !report.is_clean() {
            println!("⚠️  Ingestion finished with issues ({report})");
            println!();
        }

        store.sort_patients_by_age();
        print!("{}", render::section("Patients (sorted by age):", store.patients()));
        println!();

        store.sort_appointments_by_date();
        print!(
            "{}",
            render::section("Appointments (sorted by date):", store.appointments())
        );

        if self.completed {
            println!();
            print!(
                "{}",
                render::section("Completed Appointments:", &store.completed_appointments())
            );
        }

        if let Some(raw) = self.doctor {
            println!();
            let doctor_id = match DoctorId::new(raw) {
                Ok(id) => id,
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(3); // Invalid input exit code
                }
            };
            match store.appointments_for_doctor(doctor_id) {
                Ok(appointments) => {
                    print!(
                        "{}",
                        render::section(
                            &format!("Appointments for Doctor ID {doctor_id}:"),
                            &appointments
                        )
                    );
                }
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(3);
                }
            }
        }

        Ok(0)
    }
}
