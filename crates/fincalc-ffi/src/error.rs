//! Per-handle error-message storage for FFI.
//!
//! Each opaque handle carries its own last-error slot, so a failure on one
//! handle never disturbs another. The stored pointer stays valid until the
//! next call on the same handle or until the handle is freed.

use std::ffi::CString;

use libc::c_char;

/// Fixed message returned when the caller passes a null handle.
pub(crate) static INVALID_HANDLE_MSG: &[u8] = b"invalid calculator handle\0";

/// Returned while a handle has no error recorded.
static NO_ERROR: &[u8] = b"\0";

/// Records a message in a handle's error slot.
///
/// The messages produced here never contain interior nul bytes, but the
/// conversion stays fallible rather than panicking across the FFI boundary.
pub(crate) fn set_error(slot: &mut Option<CString>, msg: impl Into<String>) {
    let msg = msg.into();
    log::debug!("calculation rejected: {}", msg);
    *slot = CString::new(msg).ok();
}

/// Clears a handle's error slot after a successful call.
pub(crate) fn clear_error(slot: &mut Option<CString>) {
    *slot = None;
}

/// Returns the C string for a handle's error slot, or an empty string when
/// no error is recorded.
pub(crate) fn error_ptr(slot: &Option<CString>) -> *const c_char {
    match slot {
        Some(msg) => msg.as_ptr(),
        None => NO_ERROR.as_ptr().cast(),
    }
}
