///
/// Buffer Handles
///
/// Host code holds buffers as opaque `*mut ByteBuffer` handles and strings as
/// NUL-terminated `*mut c_char`. Every handle and string returned by this library
/// must be released with `bytekit_bytes_free` / `bytekit_string_free`.
///
/// Null inputs are treated as empty buffers or empty strings.
///

use std::ffi::{CStr, CString, c_char};

use bytekit_core::ByteBuffer;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_bytes_from(data: *const u8, len: usize) -> *mut ByteBuffer {
    let slice = unsafe { raw_slice(data, len) };
    into_handle(ByteBuffer::from(slice))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_bytes_len(b: *const ByteBuffer) -> usize {
    unsafe { buffer_slice(b).len() }
}

/// Pointer to the first byte; valid until the handle is freed
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_bytes_data(b: *const ByteBuffer) -> *const u8 {
    unsafe { buffer_slice(b).as_ptr() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_bytes_free(b: *mut ByteBuffer) {
    if !b.is_null() {
        unsafe { drop(Box::from_raw(b)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)) };
    }
}

pub(crate) fn into_handle(b: ByteBuffer) -> *mut ByteBuffer {
    Box::into_raw(Box::new(b))
}

/// Strings handed out here are base64, hex or digest text and never contain NUL
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

pub(crate) unsafe fn raw_slice<'a>(data: *const u8, len: usize) -> &'a [u8] {
    if data.is_null() || len == 0 {
        return &[];
    }
    unsafe { std::slice::from_raw_parts(data, len) }
}

pub(crate) unsafe fn buffer_slice<'a>(b: *const ByteBuffer) -> &'a [u8] {
    if b.is_null() {
        return &[];
    }
    unsafe { (*b).as_slice() }
}

pub(crate) unsafe fn c_str_bytes<'a>(s: *const c_char) -> &'a [u8] {
    if s.is_null() {
        return &[];
    }
    unsafe { CStr::from_ptr(s).to_bytes() }
}
