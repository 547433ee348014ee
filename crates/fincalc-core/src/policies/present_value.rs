//! Present value of a series of future cash flows.

use crate::error::{CalcError, CalcResult};
use crate::policies::CalculationPolicy;

/// Discounts a cash-flow series to the current period.
///
/// Cash flows are received at sequential periods `1..=N`; the amount at
/// period `t` contributes `cf / (1 + rate)^t`. Accumulation is sequential
/// left-to-right, so a given sequence order always reproduces the same
/// bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentValue;

impl CalculationPolicy for PresentValue {
    type Input<'a> = (f64, &'a [f64]);

    fn calculate((discount_rate, cash_flows): Self::Input<'_>) -> CalcResult<f64> {
        if cash_flows.is_empty() {
            return Err(CalcError::invalid_input("cash flows cannot be empty"));
        }
        // A rate at or below -1 makes the discount factor zero or negative.
        if discount_rate <= -1.0 {
            return Err(CalcError::invalid_input(
                "discount rate must be greater than -1",
            ));
        }

        let mut pv = 0.0;
        for (i, cash_flow) in cash_flows.iter().enumerate() {
            let period = i as i32 + 1;
            pv += cash_flow / (1.0 + discount_rate).powi(period);
        }
        Ok(pv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_period_series() {
        let pv = PresentValue::calculate((0.05, &[100.0, 200.0, 300.0])).unwrap();

        let expected = 100.0 / 1.05 + 200.0 / 1.05f64.powi(2) + 300.0 / 1.05f64.powi(3);
        assert_relative_eq!(pv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_sums_flows() {
        let pv = PresentValue::calculate((0.0, &[100.0, 200.0, 300.0])).unwrap();
        assert_relative_eq!(pv, 600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_flow() {
        let pv = PresentValue::calculate((0.10, &[110.0])).unwrap();
        assert_relative_eq!(pv, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_rate_above_floor() {
        // Deflationary rates are valid as long as they stay above -1.
        let pv = PresentValue::calculate((-0.5, &[50.0])).unwrap();
        assert_relative_eq!(pv, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_cash_flows_rejected() {
        let err = PresentValue::calculate((0.05, &[])).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("cash flows cannot be empty")
        );
    }

    #[test]
    fn test_rate_at_floor_rejected() {
        let err = PresentValue::calculate((-1.0, &[100.0])).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("discount rate must be greater than -1")
        );
    }

    #[test]
    fn test_rate_below_floor_rejected() {
        assert!(PresentValue::calculate((-1.5, &[100.0])).is_err());
    }
}
