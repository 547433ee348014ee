//! C API for the interest-rate conversion calculator.

use std::ffi::CString;
use std::panic::catch_unwind;

use libc::{c_char, c_double, c_int};

use fincalc_core::calculator::RateConversionCalculator;

use crate::error::{clear_error, error_ptr, set_error, INVALID_HANDLE_MSG};
use crate::{FINCALC_ERROR, FINCALC_ERROR_INVALID_ARG, FINCALC_ERROR_NULL_PTR, FINCALC_OK};

/// Opaque handle to a rate conversion calculator.
pub struct FincalcRateCalculator {
    calc: RateConversionCalculator,
    last_error: Option<CString>,
}

/// Creates a new rate conversion calculator.
///
/// Allocation failure aborts rather than returning null, so the returned
/// pointer is always valid. Free it with [`fincalc_rate_free`].
#[no_mangle]
pub extern "C" fn fincalc_rate_create() -> *mut FincalcRateCalculator {
    Box::into_raw(Box::new(FincalcRateCalculator {
        calc: RateConversionCalculator::new(),
        last_error: None,
    }))
}

/// Converts a nominal rate to the effective annual rate.
///
/// # Safety
///
/// - `calc` must be a valid pointer created by [`fincalc_rate_create`]
/// - `result` must be valid and writable
///
/// # Arguments
///
/// * `calc` - Calculator handle
/// * `nominal_rate` - Nominal annual rate (e.g., 0.12 for 12%)
/// * `compounding_periods` - Number of compounding periods per year
/// * `result` - Output parameter for the effective annual rate
///
/// # Returns
///
/// `FINCALC_OK` on success with `*result` populated; a negative status code
/// on failure, with the message retrievable via [`fincalc_rate_last_error`].
#[no_mangle]
pub unsafe extern "C" fn fincalc_rate_calculate(
    calc: *mut FincalcRateCalculator,
    nominal_rate: c_double,
    compounding_periods: c_int,
    result: *mut c_double,
) -> c_int {
    if calc.is_null() {
        return FINCALC_ERROR_NULL_PTR;
    }
    let handle = &mut *calc;

    if result.is_null() {
        set_error(&mut handle.last_error, "null pointer argument");
        return FINCALC_ERROR_NULL_PTR;
    }

    let calculator = handle.calc;

    match catch_unwind(move || calculator.calculate((nominal_rate, compounding_periods))) {
        Ok(Ok(value)) => {
            *result = value;
            clear_error(&mut handle.last_error);
            FINCALC_OK
        }
        Ok(Err(e)) => {
            set_error(&mut handle.last_error, e.to_string());
            FINCALC_ERROR_INVALID_ARG
        }
        Err(_) => {
            set_error(&mut handle.last_error, "Unknown error occurred");
            FINCALC_ERROR
        }
    }
}

/// Gets the last error message recorded on a handle.
///
/// # Safety
///
/// The returned string is valid until the next call on the same handle or
/// until the handle is freed; the caller must not free it. A null handle
/// yields a fixed "invalid calculator handle" message.
#[no_mangle]
pub unsafe extern "C" fn fincalc_rate_last_error(
    calc: *const FincalcRateCalculator,
) -> *const c_char {
    if calc.is_null() {
        return INVALID_HANDLE_MSG.as_ptr().cast();
    }
    error_ptr(&(*calc).last_error)
}

/// Frees a rate conversion calculator.
///
/// # Safety
///
/// `calc` must be a pointer created by [`fincalc_rate_create`], or null (in
/// which case this is a no-op). Must be called at most once per handle.
#[no_mangle]
pub unsafe extern "C" fn fincalc_rate_free(calc: *mut FincalcRateCalculator) {
    if !calc.is_null() {
        drop(Box::from_raw(calc));
    }
}
