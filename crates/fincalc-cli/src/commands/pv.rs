//! Present value command implementation.

use anyhow::Result;
use clap::Args;

use fincalc_core::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::parse_cash_flows;
use crate::output::{format_percent, print_result, KeyValue};

/// Arguments for the pv command.
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct PvArgs {
    /// Discount rate per period as a decimal fraction (e.g., 0.05 for 5%)
    #[arg(short, long)]
    pub rate: f64,

    /// Comma-separated cash flows received at periods 1..N (e.g., 100,200,300)
    #[arg(short, long)]
    pub cash_flows: String,
}

/// Execute the pv command.
pub fn execute(args: PvArgs, format: OutputFormat) -> Result<()> {
    let cash_flows = parse_cash_flows(&args.cash_flows)?;

    let calc = PresentValueCalculator::new();
    let pv = calc.calculate((args.rate, &cash_flows[..]))?;

    let rows = vec![
        KeyValue::new("Discount rate", format_percent(args.rate)),
        KeyValue::new("Cash flows", args.cash_flows.clone()),
        KeyValue::new("Present value", format!("{:.2}", pv)),
    ];
    print_result(&rows, pv, format)
}
