//! C API for the present value calculator.

use std::ffi::CString;
use std::panic::catch_unwind;
use std::slice;

use libc::{c_char, c_double, c_int, size_t};

use fincalc_core::calculator::PresentValueCalculator;

use crate::error::{clear_error, error_ptr, set_error, INVALID_HANDLE_MSG};
use crate::{FINCALC_ERROR, FINCALC_ERROR_INVALID_ARG, FINCALC_ERROR_NULL_PTR, FINCALC_OK};

/// Opaque handle to a present value calculator.
pub struct FincalcPvCalculator {
    calc: PresentValueCalculator,
    last_error: Option<CString>,
}

/// Creates a new present value calculator.
///
/// Allocation failure aborts rather than returning null, so the returned
/// pointer is always valid. Free it with [`fincalc_pv_free`].
#[no_mangle]
pub extern "C" fn fincalc_pv_create() -> *mut FincalcPvCalculator {
    Box::into_raw(Box::new(FincalcPvCalculator {
        calc: PresentValueCalculator::new(),
        last_error: None,
    }))
}

/// Calculates the present value of future cash flows.
///
/// # Safety
///
/// - `calc` must be a valid pointer created by [`fincalc_pv_create`]
/// - `cash_flows` must point to at least `n_cash_flows` doubles
/// - `result` must be valid and writable
///
/// # Arguments
///
/// * `calc` - Calculator handle
/// * `discount_rate` - Discount rate per period (e.g., 0.05 for 5%)
/// * `cash_flows` - Array of cash flows received at periods 1..N
/// * `n_cash_flows` - Number of cash flows
/// * `result` - Output parameter for the calculated present value
///
/// # Returns
///
/// `FINCALC_OK` on success with `*result` populated; a negative status code
/// on failure, with the message retrievable via [`fincalc_pv_last_error`].
#[no_mangle]
pub unsafe extern "C" fn fincalc_pv_calculate(
    calc: *mut FincalcPvCalculator,
    discount_rate: c_double,
    cash_flows: *const c_double,
    n_cash_flows: size_t,
    result: *mut c_double,
) -> c_int {
    if calc.is_null() {
        return FINCALC_ERROR_NULL_PTR;
    }
    let handle = &mut *calc;

    if cash_flows.is_null() || result.is_null() {
        set_error(&mut handle.last_error, "null pointer argument");
        return FINCALC_ERROR_NULL_PTR;
    }
    if n_cash_flows == 0 {
        set_error(&mut handle.last_error, "cash flow array is empty");
        return FINCALC_ERROR_INVALID_ARG;
    }

    let flows = slice::from_raw_parts(cash_flows, n_cash_flows);
    let calculator = handle.calc;

    match catch_unwind(move || calculator.calculate((discount_rate, flows))) {
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
pub unsafe extern "C" fn fincalc_pv_last_error(
    calc: *const FincalcPvCalculator,
) -> *const c_char {
    if calc.is_null() {
        return INVALID_HANDLE_MSG.as_ptr().cast();
    }
    error_ptr(&(*calc).last_error)
}

/// Frees a present value calculator.
///
/// # Safety
///
/// `calc` must be a pointer created by [`fincalc_pv_create`], or null (in
/// which case this is a no-op). Must be called at most once per handle.
#[no_mangle]
pub unsafe extern "C" fn fincalc_pv_free(calc: *mut FincalcPvCalculator) {
    if !calc.is_null() {
        drop(Box::from_raw(calc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    unsafe fn last_error_string(calc: *const FincalcPvCalculator) -> String {
        CStr::from_ptr(fincalc_pv_last_error(calc))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_calculate_series() {
        unsafe {
            let calc = fincalc_pv_create();
            let flows = [100.0, 200.0, 300.0];
            let mut result = 0.0;

            let status =
                fincalc_pv_calculate(calc, 0.05, flows.as_ptr(), flows.len(), &mut result);

            assert_eq!(status, FINCALC_OK);
            let expected = 100.0 / 1.05 + 200.0 / 1.05f64.powi(2) + 300.0 / 1.05f64.powi(3);
            assert!((result - expected).abs() < 1e-12);
            assert_eq!(last_error_string(calc), "");

            fincalc_pv_free(calc);
        }
    }

    #[test]
    fn test_empty_array_rejected_at_boundary() {
        unsafe {
            let calc = fincalc_pv_create();
            let flows = [100.0];
            let mut result = 0.0;

            let status = fincalc_pv_calculate(calc, 0.05, flows.as_ptr(), 0, &mut result);

            assert_eq!(status, FINCALC_ERROR_INVALID_ARG);
            assert_eq!(last_error_string(calc), "cash flow array is empty");

            fincalc_pv_free(calc);
        }
    }

    #[test]
    fn test_core_validation_failure_sets_message() {
        unsafe {
            let calc = fincalc_pv_create();
            let flows = [100.0];
            let mut result = 0.0;

            let status =
                fincalc_pv_calculate(calc, -1.5, flows.as_ptr(), flows.len(), &mut result);

            assert_eq!(status, FINCALC_ERROR_INVALID_ARG);
            assert_eq!(
                last_error_string(calc),
                "Invalid input: discount rate must be greater than -1"
            );

            fincalc_pv_free(calc);
        }
    }

    #[test]
    fn test_handle_usable_after_failure() {
        unsafe {
            let calc = fincalc_pv_create();
            let flows = [100.0];
            let mut result = 0.0;

            assert_eq!(
                fincalc_pv_calculate(calc, -1.5, flows.as_ptr(), flows.len(), &mut result),
                FINCALC_ERROR_INVALID_ARG
            );
            assert_eq!(
                fincalc_pv_calculate(calc, 0.05, flows.as_ptr(), flows.len(), &mut result),
                FINCALC_OK
            );
            assert!((result - 100.0 / 1.05).abs() < 1e-12);
            assert_eq!(last_error_string(calc), "");

            fincalc_pv_free(calc);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let flows = [100.0];
            let mut result = 0.0;

            assert_eq!(
                fincalc_pv_calculate(
                    ptr::null_mut(),
                    0.05,
                    flows.as_ptr(),
                    flows.len(),
                    &mut result
                ),
                FINCALC_ERROR_NULL_PTR
            );
            assert_eq!(last_error_string(ptr::null()), "invalid calculator handle");

            let calc = fincalc_pv_create();
            assert_eq!(
                fincalc_pv_calculate(calc, 0.05, ptr::null(), 1, &mut result),
                FINCALC_ERROR_NULL_PTR
            );
            assert_eq!(last_error_string(calc), "null pointer argument");

            fincalc_pv_free(calc);
            fincalc_pv_free(ptr::null_mut());
        }
    }
}
