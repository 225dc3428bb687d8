//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(
    name = "rigdemo",
    version,
    about = "Canned hardware test sequence for demos and scripted runs"
)]
pub struct Cli {
    /// Path to config TOML (optional; built-in sequence when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log and report errors as JSON lines instead of pretty text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Multiply every pause by FACTOR (0 = no pauses); overrides timing.scale
    #[arg(long, value_name = "FACTOR")]
    pub time_scale: Option<f64>,

    /// Print records without spaces after ':' and ','
    #[arg(long, action = ArgAction::SetTrue)]
    pub compact: bool,

    /// Command to execute (default: run)
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Play the sequence on stdout
    Run,
    /// Print the schedule with start offsets, without pausing
    Plan,
    /// Load and validate the configuration, then print "ok"
    Health,
}
