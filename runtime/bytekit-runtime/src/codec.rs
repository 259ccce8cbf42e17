///
/// Codec Entry Points
///
/// C ABI wrappers over the encoding, compression and crypto crates.
///
/// Fallible calls return via out parameters:
/// tag = 0: success, value = `*mut ByteBuffer` handle
/// tag = 1: error, value = BYTEKIT_ERR_* code, or for base64 decode the position
/// of the invalid character
///

use std::ffi::c_char;

use bytekit_core::{ByteBuffer, CodecError};

use crate::bytes::{buffer_slice, c_str_bytes, into_c_string, into_handle};

pub const BYTEKIT_ERR_COMPRESSION: i64 = 2;
pub const BYTEKIT_ERR_DECOMPRESSION: i64 = 3;
pub const BYTEKIT_ERR_RANDOM: i64 = 4;

fn error_code(e: &CodecError) -> i64 {
    match e {
        CodecError::InvalidEncoding { position, .. } => *position as i64,
        CodecError::CompressionFailure(_) => BYTEKIT_ERR_COMPRESSION,
        CodecError::DecompressionFailure(_) => BYTEKIT_ERR_DECOMPRESSION,
        CodecError::RandomGenerationFailure(_) => BYTEKIT_ERR_RANDOM,
    }
}

unsafe fn write_result(
    result: Result<ByteBuffer, CodecError>,
    out_tag: *mut i32,
    out_value: *mut i64,
) {
    let (tag, value) = match result {
        Ok(b) => (0, into_handle(b) as i64),
        Err(e) => (1, error_code(&e)),
    };
    unsafe {
        *out_tag = tag;
        *out_value = value;
    }
}

/// Encode bytes to base64 string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_base64_encode(b: *const ByteBuffer) -> *mut c_char {
    let data = unsafe { buffer_slice(b) };
    into_c_string(bytekit_encoding::encode_base64(data))
}

/// Decode base64 string to bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_base64_decode(
    s: *const c_char,
    out_tag: *mut i32,
    out_value: *mut i64,
) {
    let raw = unsafe { c_str_bytes(s) };
    let result = match std::str::from_utf8(raw) {
        Ok(text) => bytekit_encoding::decode_base64(text),
        Err(e) => Err(CodecError::invalid_encoding(e.valid_up_to(), "invalid utf-8")),
    };
    unsafe { write_result(result, out_tag, out_value) }
}

/// Encode bytes to lowercase hexadecimal string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_hex_encode(b: *const ByteBuffer) -> *mut c_char {
    let data = unsafe { buffer_slice(b) };
    into_c_string(bytekit_encoding::to_hex_string(data))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_gzip_deflate(
    b: *const ByteBuffer,
    out_tag: *mut i32,
    out_value: *mut i64,
) {
    let data = unsafe { buffer_slice(b) };
    unsafe { write_result(bytekit_compress::deflate(data), out_tag, out_value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_gzip_inflate(
    b: *const ByteBuffer,
    out_tag: *mut i32,
    out_value: *mut i64,
) {
    let data = unsafe { buffer_slice(b) };
    unsafe { write_result(bytekit_compress::inflate(data), out_tag, out_value) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha1(b: *const ByteBuffer) -> *mut ByteBuffer {
    into_handle(bytekit_crypto::sha1(unsafe { buffer_slice(b) }))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha1_hex(b: *const ByteBuffer) -> *mut c_char {
    into_c_string(bytekit_crypto::sha1_hex(unsafe { buffer_slice(b) }))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha224(b: *const ByteBuffer) -> *mut ByteBuffer {
    into_handle(bytekit_crypto::sha224(unsafe { buffer_slice(b) }))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha224_hex(b: *const ByteBuffer) -> *mut c_char {
    into_c_string(bytekit_crypto::sha224_hex(unsafe { buffer_slice(b) }))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha256(b: *const ByteBuffer) -> *mut ByteBuffer {
    into_handle(bytekit_crypto::sha256(unsafe { buffer_slice(b) }))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_sha256_hex(b: *const ByteBuffer) -> *mut c_char {
    into_c_string(bytekit_crypto::sha256_hex(unsafe { buffer_slice(b) }))
}

/// Deprecated MD5 hex digest for hosts that still key data by it
#[unsafe(no_mangle)]
#[allow(deprecated)]
pub unsafe extern "C" fn bytekit_legacy_digest_hex(b: *const ByteBuffer) -> *mut c_char {
    into_c_string(bytekit_crypto::legacy::legacy_digest_hex(unsafe { buffer_slice(b) }))
}

/// Generate n cryptographically secure random bytes; n <= 0 yields an empty buffer
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_random_bytes(n: i64, out_tag: *mut i32, out_value: *mut i64) {
    let len = if n <= 0 { 0usize } else { n as usize };
    unsafe { write_result(bytekit_crypto::random_bytes(len), out_tag, out_value) }
}
