//! Effective annual rate from a nominal rate.

use crate::error::{CalcError, CalcResult};
use crate::policies::CalculationPolicy;

/// Converts a nominal rate compounded `m` times per year into the
/// equivalent effective annual rate: `(1 + nominal/m)^m - 1`.
///
/// The compounding base `1 + nominal/m` must stay positive; the positivity
/// check runs after the period-count check so the division is always
/// well-defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateConversion;

impl CalculationPolicy for RateConversion {
    type Input<'a> = (f64, i32);

    fn calculate((nominal_rate, compounding_periods): Self::Input<'_>) -> CalcResult<f64> {
        if compounding_periods <= 0 {
            return Err(CalcError::invalid_input(
                "compounding periods must be positive",
            ));
        }

        let base = 1.0 + nominal_rate / f64::from(compounding_periods);
        if base <= 0.0 {
            return Err(CalcError::invalid_input(
                "nominal rate must keep the compounding base positive",
            ));
        }

        Ok(base.powi(compounding_periods) - 1.0)
    }
}
