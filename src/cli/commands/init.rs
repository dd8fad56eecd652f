//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cura.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cura configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your data file paths", self.output);
                println!("  2. Validate configuration: cura validate-config");
                println!("  3. Display the records: cura report");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Cura Configuration File
# Clinical Records Tracking Tool

[application]
name = "cura"
# Log level: trace, debug, info, warn, error
log_level = "info"

[data]
# Delimited sources, first line is a header.
# Patients: id,name,age,gender,history  (history: [entry;entry])
patients_file = "data/patients.csv"
# Doctors: id,name,specialization
doctors_file = "data/doctors.csv"
# Appointments: id,patientId,doctorId,date,status
appointments_file = "data/appointments.csv"

[logging]
# Rotating JSON file logging, in addition to console output
local_enabled = false
local_path = "logs"
# Rotation: daily or hourly
local_rotation = "daily"
"#
        .to_string()
    }
}
