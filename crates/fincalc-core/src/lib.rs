//! # Fincalc Core
//!
//! Policy-based calculation engine for the fincalc financial calculator.
//!
//! This crate provides:
//!
//! - **Policies**: three stateless calculation strategies — [`PresentValue`](policies::PresentValue),
//!   [`FutureValue`](policies::FutureValue), and [`RateConversion`](policies::RateConversion) —
//!   each owning one formula together with its validation rules
//! - **Calculator**: a zero-sized generic host that forwards a call to its
//!   policy and propagates validation failures unchanged
//!
//! ## Design Philosophy
//!
//! - **Validation lives with the formula**: the host performs no checks of
//!   its own, so each policy's edge-case rules stay next to the arithmetic
//! - **Pure functions**: every result depends only on the explicit inputs;
//!   identical inputs produce bit-identical output
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let calc = PresentValueCalculator::new();
//! let pv = calc.calculate((0.05, &[100.0, 200.0, 300.0][..])).unwrap();
//! assert!(pv > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod error;
pub mod policies;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        Calculator, FutureValueCalculator, PresentValueCalculator, RateConversionCalculator,
    };
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::policies::{CalculationPolicy, FutureValue, PresentValue, RateConversion};
}

// Re-export commonly used types at crate root
pub use calculator::Calculator;
pub use error::{CalcError, CalcResult};
