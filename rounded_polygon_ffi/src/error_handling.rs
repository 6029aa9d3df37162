use std::{cell::RefCell, ffi::CString, os::raw::c_char};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that reported the error.
    pub fn_name: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, fn_name: CString) -> Self {
        LastErrorData { error_msg, fn_name }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information for the current thread.
///
/// Interior null bytes are stripped from `error_msg` and `fn_name`.
pub fn set_last_error(error_msg: impl Into<Vec<u8>>, fn_name: impl Into<Vec<u8>>) {
    let msg = to_c_string(error_msg.into());
    let name = to_c_string(fn_name.into());

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg, name));
    });
}

/// Clear the last error for the current thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}

/// Pointer to the last error message for the current thread or null if no error is set.
///
/// The pointer stays valid until the next error is set or cleared on the same thread.
pub fn last_error_msg_ptr() -> *const c_char {
    LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map_or(std::ptr::null(), |e| e.error_msg.as_ptr())
    })
}

/// Pointer to the name of the function that set the last error for the current thread or null if
/// no error is set.
pub fn last_error_fn_name_ptr() -> *const c_char {
    LAST_ERROR.with(|last_error| {
        last_error
            .borrow()
            .as_ref()
            .map_or(std::ptr::null(), |e| e.fn_name.as_ptr())
    })
}

fn to_c_string(mut bytes: Vec<u8>) -> CString {
    bytes.retain(|&b| b != 0);
    // no interior nulls remain
    CString::new(bytes).unwrap_or_default()
}
