//! C FFI bindings for the ckzg allocation layer.
//!
//! Exposes the allocators through the c-kzg calling convention: each
//! entry point takes an out-pointer, returns a
//! [`status::CKzgRet`] code as `i32`, and leaves the out-pointer untouched
//! on failure. Buffers are released with the matching `ckzg_free*`
//! function and the same element count. A header is generated into
//! `include/ckzg.h` at build time.
//!
//! This is the only crate in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into `CKzgRet::Error`.
///
/// Unwinding across an `extern "C"` boundary aborts the process; callers
/// get an error code instead.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $crate::status::CKzgRet::Error as i32,
        }
    };
}

pub mod memory;
pub mod status;

pub use status::CKzgRet;
