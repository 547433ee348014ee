//! Calculation policies.
//!
//! Each policy is a stateless strategy supplying one formula together with
//! the validation rules for its inputs. Policies plug into
//! [`Calculator`](crate::calculator::Calculator), which forwards arguments
//! unchanged; all range and shape checks happen here, next to the
//! arithmetic they protect.

mod future_value;
mod present_value;
mod rate_conversion;

pub use future_value::FutureValue;
pub use present_value::PresentValue;
pub use rate_conversion::RateConversion;

use crate::error::CalcResult;

/// A single calculation strategy.
///
/// Implementors define the argument tuple they accept and the formula that
/// maps it to a result. Validation is part of the contract: a policy must
/// reject out-of-range inputs with
/// [`CalcError::InvalidInput`](crate::error::CalcError) rather than produce
/// a meaningless number.
pub trait CalculationPolicy {
    /// Argument tuple for the calculation. Generic over a lifetime so a
    /// policy may borrow its inputs (e.g. a cash-flow slice).
    type Input<'a>;

    /// Runs the calculation, validating inputs first.
    fn calculate(input: Self::Input<'_>) -> CalcResult<f64>;
}
