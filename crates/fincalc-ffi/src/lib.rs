//! # Fincalc FFI
//!
//! C-compatible Foreign Function Interface for the fincalc financial
//! calculator.
//!
//! This crate provides C-compatible bindings for use from other languages
//! including:
//! - C/C++
//! - Python (via ctypes/cffi)
//! - Java (via JNI)
//! - C# (via P/Invoke)
//!
//! Each calculator kind (present value, future value, rate conversion) has
//! its own opaque handle with `create` / `calculate` / `last_error` / `free`
//! entry points sharing one calling convention.
//!
//! ## Safety
//!
//! The calculation and accessor functions are `unsafe` as they deal with
//! raw pointers and assume correct usage from the caller. The caller is
//! responsible for:
//!
//! - Ensuring pointers are valid and non-null
//! - Freeing handles with the matching `fincalc_*_free` function
//! - Not using handles after they have been freed
//!
//! ## Error Handling
//!
//! Calculation functions return status codes (`FINCALC_OK` = success,
//! negative = failure). On failure the message is recorded on the handle
//! and can be retrieved with the matching `fincalc_*_last_error` function;
//! it stays valid until the next call on that handle or until the handle is
//! freed. A failed call leaves the handle fully usable.

#![allow(clippy::missing_safety_doc)]

use libc::{c_char, c_int};

mod error;
mod future_value;
mod present_value;
mod rate_conversion;

pub use future_value::{
    fincalc_fv_calculate, fincalc_fv_create, fincalc_fv_free, fincalc_fv_last_error,
    FincalcFvCalculator,
};
pub use present_value::{
    fincalc_pv_calculate, fincalc_pv_create, fincalc_pv_free, fincalc_pv_last_error,
    FincalcPvCalculator,
};
pub use rate_conversion::{
    fincalc_rate_calculate, fincalc_rate_create, fincalc_rate_free, fincalc_rate_last_error,
    FincalcRateCalculator,
};

/// Result code for successful operations.
pub const FINCALC_OK: c_int = 0;

/// Result code for unexpected internal errors.
pub const FINCALC_ERROR: c_int = -1;

/// Result code for invalid arguments.
pub const FINCALC_ERROR_INVALID_ARG: c_int = -2;

/// Result code for null pointer errors.
pub const FINCALC_ERROR_NULL_PTR: c_int = -3;

/// Returns the library version string.
///
/// # Safety
///
/// The returned string is statically allocated and valid for the lifetime
/// of the program.
#[no_mangle]
pub extern "C" fn fincalc_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr() as *const c_char
}
