//! Generic calculation host.

use std::marker::PhantomData;

use crate::error::CalcResult;
use crate::policies::{CalculationPolicy, FutureValue, PresentValue, RateConversion};

/// A calculator specialized by a calculation policy.
///
/// The host holds no state and performs no validation: it hands its
/// argument tuple to the policy and returns the outcome unchanged. This
/// keeps every formula's edge-case rules colocated with the formula while
/// giving all three calculators one calling convention, which is what the
/// FFI layer builds on.
///
/// Instances are zero-sized and safe to reuse across independent calls; a
/// failed call does not affect later ones.
///
/// # Example
///
/// ```rust
/// use fincalc_core::calculator::FutureValueCalculator;
///
/// let calc = FutureValueCalculator::new();
/// let fv = calc.calculate((1000.0, 0.05, 10)).unwrap();
/// assert!((fv - 1628.89).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Calculator<P: CalculationPolicy> {
    _policy: PhantomData<P>,
}

impl<P: CalculationPolicy> Calculator<P> {
    /// Creates a new calculator for the policy `P`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _policy: PhantomData,
        }
    }

    /// Forwards the arguments to the policy and returns its result.
    pub fn calculate(&self, input: P::Input<'_>) -> CalcResult<f64> {
        P::calculate(input)
    }
}

impl<P: CalculationPolicy> Default for Calculator<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Present value calculator.
pub type PresentValueCalculator = Calculator<PresentValue>;

/// Future value calculator.
pub type FutureValueCalculator = Calculator<FutureValue>;

/// Effective-annual-rate calculator.
pub type RateConversionCalculator = Calculator<RateConversion>;
