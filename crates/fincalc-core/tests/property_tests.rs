//! Property-based tests for the calculation policies.
//!
//! These tests verify invariants that should hold across the whole input
//! domain:
//! - Determinism: identical inputs produce bit-identical results
//! - Present value round-trip: discounting a compounded amount recovers it
//! - Future value inverse: discounting FV(P, r, n) back recovers P
//! - EAR monotonicity in compounding frequency

use fincalc_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// PROPERTY: DETERMINISM
// =============================================================================

proptest! {
    #[test]
    fn present_value_is_deterministic(
        rate in -0.99f64..5.0,
        flows in prop::collection::vec(-1e6f64..1e6, 1..32),
    ) {
        let calc = PresentValueCalculator::new();
        let first = calc.calculate((rate, &flows[..])).unwrap();
        let second = calc.calculate((rate, &flows[..])).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn future_value_is_deterministic(
        principal in 0.0f64..1e9,
        rate in -0.99f64..5.0,
        periods in 1i32..100,
    ) {
        let calc = FutureValueCalculator::new();
        let first = calc.calculate((principal, rate, periods)).unwrap();
        let second = calc.calculate((principal, rate, periods)).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

// =============================================================================
// PROPERTY: ROUND TRIPS
// =============================================================================

proptest! {
    #[test]
    fn single_flow_round_trip_recovers_principal(
        rate in -0.9f64..2.0,
        principal in 0.01f64..1e6,
    ) {
        // A single cash flow of P*(1+r) one period out discounts back to P.
        let future_amount = principal * (1.0 + rate);
        let pv = PresentValueCalculator::new()
            .calculate((rate, &[future_amount][..]))
            .unwrap();
        prop_assert!((pv - principal).abs() <= principal * 1e-12);
    }

    #[test]
    fn future_value_discounts_back_to_principal(
        rate in -0.9f64..2.0,
        principal in 0.01f64..1e6,
        periods in 1i32..40,
    ) {
        let fv = FutureValueCalculator::new()
            .calculate((principal, rate, periods))
            .unwrap();
        let recovered = fv / (1.0 + rate).powi(periods);
        prop_assert!((recovered - principal).abs() <= principal * 1e-9);
    }

    #[test]
    fn effective_rate_never_below_nominal_for_positive_rates(
        nominal in 0.001f64..1.0,
        periods in 1i32..365,
    ) {
        let ear = RateConversionCalculator::new()
            .calculate((nominal, periods))
            .unwrap();
        prop_assert!(ear >= nominal - 1e-12);
    }
}

// =============================================================================
// PROPERTY: EAR MONOTONICITY AND CONVERGENCE
// =============================================================================

#[test]
fn property_ear_increases_with_compounding_frequency() {
    let calc = RateConversionCalculator::new();

    for nominal in [0.01, 0.06, 0.12, 0.25] {
        let mut prev = f64::NEG_INFINITY;
        for periods in [1, 2, 4, 12, 52, 365, 8760] {
            let ear = calc.calculate((nominal, periods)).unwrap();
            assert!(
                ear >= prev,
                "EAR fell from {} to {} at m={} for nominal={}",
                prev,
                ear,
                periods,
                nominal
            );
            prev = ear;
        }

        // Hourly compounding should sit just below the continuous limit.
        let limit = nominal.exp() - 1.0;
        assert!(prev <= limit + 1e-9);
        assert!(
            (limit - prev) / limit < 1e-3,
            "EAR {} too far from continuous limit {} for nominal={}",
            prev,
            limit,
            nominal
        );
    }
}

#[test]
fn property_boundary_rejection_is_uniform_over_rate() {
    // An empty series is rejected no matter the rate.
    let calc = PresentValueCalculator::new();
    for rate in [-0.99, -0.5, 0.0, 0.05, 1.0, 10.0] {
        let err = calc.calculate((rate, &[][..])).unwrap_err();
        assert_eq!(err, CalcError::invalid_input("cash flows cannot be empty"));
    }
}
