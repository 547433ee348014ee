//! Effective annual rate command implementation.

use anyhow::Result;
use clap::Args;

use fincalc_core::prelude::*;

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_result, KeyValue};

/// Arguments for the ear command.
#[derive(Args, Debug)]
pub struct EarArgs {
    /// Nominal annual rate as a decimal fraction (e.g., 0.12 for 12%)
    #[arg(short, long)]
    pub nominal: f64,

    /// Number of compounding periods per year (e.g., 12 for monthly)
    #[arg(short = 'm', long)]
    pub periods: i32,
}

/// Execute the ear command.
pub fn execute(args: EarArgs, format: OutputFormat) -> Result<()> {
    let calc = RateConversionCalculator::new();
    let ear = calc.calculate((args.nominal, args.periods))?;

    let rows = vec![
        KeyValue::new("Nominal rate", format_percent(args.nominal)),
        KeyValue::new("Compounding periods", args.periods.to_string()),
        KeyValue::new("Effective annual rate", format!("{:.4}%", ear * 100.0)),
    ];
    print_result(&rows, ear, format)
}
