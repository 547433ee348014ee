//! CLI command implementations.

pub mod demo;
pub mod ear;
pub mod fv;
pub mod pv;

// Re-export argument structs for convenience
pub use ear::EarArgs;
pub use fv::FvArgs;
pub use pv::PvArgs;

use crate::error::{CliError, CliResult};

/// Parses a comma-separated cash-flow list. Empty segments (e.g. from a
/// trailing comma) are skipped; range checks are the engine's job.
pub fn parse_cash_flows(s: &str) -> CliResult<Vec<f64>> {
    let flows = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| CliError::InvalidCashFlow(part.to_string()))
        })
        .collect::<CliResult<Vec<f64>>>()?;

    log::debug!("parsed {} cash flows", flows.len());
    Ok(flows)
}
