//! C-compatible status codes.
//!
//! [`CKzgRet`] keeps the numbering of c-kzg's `C_KZG_RET` enum so existing
//! C callers can compare against the same constants. The generated header
//! exports it under that name.

use ckzg_core::AllocError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are positive. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CKzgRet {
    /// Success.
    Ok = 0,
    /// An argument is null or otherwise invalid.
    BadArgs = 1,
    /// Internal error (a Rust panic caught at the boundary).
    Error = 2,
    /// Memory could not be allocated, including size overflow.
    Malloc = 3,
}

impl CKzgRet {
    /// Map a raw code back to a status, if it is one.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::BadArgs),
            2 => Some(Self::Error),
            3 => Some(Self::Malloc),
            _ => None,
        }
    }
}

impl From<&AllocError> for CKzgRet {
    fn from(e: &AllocError) -> Self {
        match e {
            AllocError::ResourceExhausted { .. } => CKzgRet::Malloc,
        }
    }
}
