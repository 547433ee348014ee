//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{EarArgs, FvArgs, PvArgs};

/// Fincalc - policy-based financial calculator
#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Present value of a series of future cash flows
    Pv(PvArgs),

    /// Future value of a principal compounded over a number of periods
    Fv(FvArgs),

    /// Effective annual rate from a nominal rate
    Ear(EarArgs),

    /// Run the full demonstration walkthrough
    Demo,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
