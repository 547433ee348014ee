//! Future value of a principal compounded over a number of periods.

use crate::error::{CalcError, CalcResult};
use crate::policies::CalculationPolicy;

/// Compounds a principal forward at a fixed per-period rate.
///
/// Returns `principal * (1 + rate)^periods`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureValue;

impl CalculationPolicy for FutureValue {
    type Input<'a> = (f64, f64, i32);

    fn calculate((principal, interest_rate, periods): Self::Input<'_>) -> CalcResult<f64> {
        if principal < 0.0 {
            return Err(CalcError::invalid_input("principal cannot be negative"));
        }
        if interest_rate <= -1.0 {
            return Err(CalcError::invalid_input(
                "interest rate must be greater than -1",
            ));
        }
        if periods <= 0 {
            return Err(CalcError::invalid_input("periods must be positive"));
        }

        Ok(principal * (1.0 + interest_rate).powi(periods))
    }
}
