//! CLI command definitions and dispatch for the `anam` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod cases;
pub mod chat;
pub mod check;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Practice clinical history taking with simulated patients.
#[derive(Parser)]
#[command(name = "anam", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available patient cases.
    #[command(alias = "ls")]
    Cases,

    /// Start an interactive interview with a simulated patient.
    Chat {
        /// Patient case, by label or 1-based number (prompts if omitted).
        case: Option<String>,
    },

    /// Verify the API credential and case registry.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
