//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cura using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cura - Clinical Records Tracking Tool
#[derive(Parser, Debug)]
#[command(name = "cura")]
#[command(version, about, long_about = None)]
#[command(author = "Cura Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cura.toml", env = "CURA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CURA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the data files and display sorted record listings
    Report(commands::report::ReportArgs),

    /// Schedule an appointment for a patient with a doctor
    Schedule(commands::schedule::ScheduleArgs),

    /// Show a patient's medical history, optionally recording a vitals note
    History(commands::history::HistoryArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
