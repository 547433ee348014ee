//! Future value command implementation.

use anyhow::Result;
use clap::Args;

use fincalc_core::prelude::*;

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_result, KeyValue};

/// Arguments for the fv command.
#[derive(Args, Debug)]
pub struct FvArgs {
    /// Initial principal amount
    #[arg(short, long)]
    pub principal: f64,

    /// Interest rate per period as a decimal fraction (e.g., 0.05 for 5%)
    #[arg(short, long)]
    pub rate: f64,

    /// Number of compounding periods
    #[arg(short = 'n', long)]
    pub periods: i32,
}

/// Execute the fv command.
pub fn execute(args: FvArgs, format: OutputFormat) -> Result<()> {
    let calc = FutureValueCalculator::new();
    let fv = calc.calculate((args.principal, args.rate, args.periods))?;

    let rows = vec![
        KeyValue::new("Principal", format!("{:.2}", args.principal)),
        KeyValue::new("Interest rate", format_percent(args.rate)),
        KeyValue::new("Periods", args.periods.to_string()),
        KeyValue::new("Future value", format!("{:.2}", fv)),
    ];
    print_result(&rows, fv, format)
}
