// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// metaphone-ffi: C-compatible FFI layer for the Double Metaphone encoder.
//
// Memory management rules:
// - Opaque `DoubleMetaphone` pointer: created by `dm_new`, freed by `dm_free`.
// - Codes written to `primary_out` / `secondary_out`: caller frees each
//   non-NULL string with `dm_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use metaphone::{Codes, DoubleMetaphone, EncodeError, EncoderOptions};

/// The word was encoded.
pub const DM_OK: c_int = 0;
/// The word pointer was NULL or not valid UTF-8, or an out-pointer was NULL.
pub const DM_INVALID_INPUT: c_int = -1;
/// The encoder produced no primary code.
pub const DM_ENCODING_FAILED: c_int = -2;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create an encoder keeping at most `max_code_length` symbols per code
/// (0 selects the default of 4).
///
/// Free with `dm_free`.
#[unsafe(no_mangle)]
pub extern "C" fn dm_new(max_code_length: usize) -> *mut DoubleMetaphone {
    let options = if max_code_length == 0 {
        EncoderOptions::default()
    } else {
        EncoderOptions { max_code_length }
    };
    Box::into_raw(Box::new(DoubleMetaphone::with_options(options)))
}

/// Free an encoder created by `dm_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dm_free(handle: *mut DoubleMetaphone) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode `word` with the default four-symbol codes.
///
/// On success returns `DM_OK`, stores the primary code in `*primary_out` and
/// the secondary code in `*secondary_out`, or NULL there when the word has a
/// single reading. On failure both out-pointers receive NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dm_encode(
    word: *const c_char,
    primary_out: *mut *mut c_char,
    secondary_out: *mut *mut c_char,
) -> c_int {
    let encoder = DoubleMetaphone::new();
    encode_into(&encoder, word, primary_out, secondary_out)
}

/// Like `dm_encode`, using the options of `handle`.
///
/// Returns `DM_INVALID_INPUT` if `handle` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dm_encode_with(
    handle: *const DoubleMetaphone,
    word: *const c_char,
    primary_out: *mut *mut c_char,
    secondary_out: *mut *mut c_char,
) -> c_int {
    let Some(encoder) = (unsafe { handle.as_ref() }) else {
        clear(primary_out);
        clear(secondary_out);
        return DM_INVALID_INPUT;
    };
    encode_into(encoder, word, primary_out, secondary_out)
}

/// Whether two words share a phonetic code.
/// Returns 1 for a match, 0 for no match, -1 on invalid input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dm_sounds_like(a: *const c_char, b: *const c_char) -> c_int {
    let (Some(a), Some(b)) = (cstr_to_str(a), cstr_to_str(b)) else {
        return DM_INVALID_INPUT;
    };
    if DoubleMetaphone::new().sounds_like(a, b) { 1 } else { 0 }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn dm_version() -> *const c_char {
    static VERSION: &CStr = match CStr::from_bytes_with_nul(
        concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
    ) {
        Ok(version) => version,
        Err(_) => c"",
    };
    VERSION.as_ptr()
}

/// Free a code string returned through `dm_encode`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dm_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

fn encode_into(
    encoder: &DoubleMetaphone,
    word: *const c_char,
    primary_out: *mut *mut c_char,
    secondary_out: *mut *mut c_char,
) -> c_int {
    clear(primary_out);
    clear(secondary_out);
    if primary_out.is_null() || secondary_out.is_null() {
        return DM_INVALID_INPUT;
    }

    match encoder.encode_nullable(cstr_to_str(word)) {
        Ok(codes) => {
            write_codes(codes, primary_out, secondary_out);
            DM_OK
        }
        Err(e) => status(e),
    }
}

fn write_codes(codes: Codes, primary_out: *mut *mut c_char, secondary_out: *mut *mut c_char) {
    let (primary, secondary) = codes.into_parts();
    unsafe {
        *primary_out = str_to_c(&primary);
        *secondary_out = secondary.map_or(ptr::null_mut(), |s| str_to_c(&s));
    }
}

fn status(e: EncodeError) -> c_int {
    match e {
        EncodeError::InvalidInput => DM_INVALID_INPUT,
        EncodeError::EncodingFailed => DM_ENCODING_FAILED,
    }
}

fn clear(out: *mut *mut c_char) {
    if !out.is_null() {
        unsafe { *out = ptr::null_mut() };
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
