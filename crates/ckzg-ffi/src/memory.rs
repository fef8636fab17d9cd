//! Allocation FFI: byte, field-element and curve-point buffers.
//!
//! Each `ckzg_malloc`/`ckzg_new_*` call writes an owning pointer to `out`
//! and returns [`CKzgRet::Ok`]. A zero count succeeds with `*out = NULL`.
//! On [`CKzgRet::BadArgs`] or [`CKzgRet::Malloc`] the value behind `out` is
//! not modified.
//!
//! Memory must be released with the `ckzg_free*` function of the same
//! element type, passing the count used to allocate it.

use std::ffi::c_void;
use std::ptr;

use blst::{blst_fr, blst_p1, blst_p2};
use ckzg_core::Element;

use crate::status::CKzgRet;

/// Hand ownership of a buffer to C. Empty buffers become `NULL`.
fn into_raw<T>(buf: Box<[T]>) -> *mut T {
    if buf.is_empty() {
        return ptr::null_mut();
    }
    Box::into_raw(buf).cast::<T>()
}

/// Allocate `n` elements of `T` from the process heap into `*out`.
#[allow(unsafe_code)]
fn new_array<T: Element>(out: *mut *mut T, n: usize) -> i32 {
    if out.is_null() {
        return CKzgRet::BadArgs as i32;
    }
    match ckzg_alloc::Allocator::system().allocate::<T>(n) {
        Ok(buf) => {
            // SAFETY: `out` is non-null; caller guarantees it is valid and aligned.
            unsafe { *out = into_raw(buf) };
            CKzgRet::Ok as i32
        }
        Err(e) => CKzgRet::from(&e) as i32,
    }
}

/// Reclaim a buffer previously handed out by [`new_array`].
///
/// # Safety
///
/// `ptr` must be `NULL` or a pointer returned by `new_array::<T>` with the
/// same `n`, not yet released.
#[allow(unsafe_code)]
unsafe fn release<T>(ptr: *mut T, n: usize) {
    if ptr.is_null() || n == 0 {
        return;
    }
    // SAFETY: per the contract above, `ptr` owns a boxed slice of `n` elements.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, n)) });
}

// ── FFI functions ───────────────────────────────────────────────

/// Allocate `n` zeroed bytes. Writes the buffer pointer to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn ckzg_malloc(out: *mut *mut c_void, n: usize) -> i32 {
    ffi_guard!({ new_array::<u8>(out.cast::<*mut u8>(), n) })
}

/// Allocate `n` zeroed scalar-field elements. Writes the array to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn ckzg_new_fr(out: *mut *mut blst_fr, n: usize) -> i32 {
    ffi_guard!({ new_array::<blst_fr>(out, n) })
}

/// Allocate `n` zeroed G1 points. Writes the array to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn ckzg_new_p1(out: *mut *mut blst_p1, n: usize) -> i32 {
    ffi_guard!({ new_array::<blst_p1>(out, n) })
}

/// Allocate `n` zeroed G2 points. Writes the array to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn ckzg_new_p2(out: *mut *mut blst_p2, n: usize) -> i32 {
    ffi_guard!({ new_array::<blst_p2>(out, n) })
}

/// Release a buffer from [`ckzg_malloc`]. `NULL` is a no-op.
///
/// # Safety
///
/// `p` must be `NULL` or returned by `ckzg_malloc` with the same `n`, and
/// must not be used afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn ckzg_free(p: *mut c_void, n: usize) {
    unsafe { release(p.cast::<u8>(), n) }
}

/// Release an array from [`ckzg_new_fr`]. `NULL` is a no-op.
///
/// # Safety
///
/// `p` must be `NULL` or returned by `ckzg_new_fr` with the same `n`, and
/// must not be used afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn ckzg_free_fr(p: *mut blst_fr, n: usize) {
    unsafe { release(p, n) }
}

/// Release an array from [`ckzg_new_p1`]. `NULL` is a no-op.
///
/// # Safety
///
/// `p` must be `NULL` or returned by `ckzg_new_p1` with the same `n`, and
/// must not be used afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn ckzg_free_p1(p: *mut blst_p1, n: usize) {
    unsafe { release(p, n) }
}

/// Release an array from [`ckzg_new_p2`]. `NULL` is a no-op.
///
/// # Safety
///
/// `p` must be `NULL` or returned by `ckzg_new_p2` with the same `n`, and
/// must not be used afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn ckzg_free_p2(p: *mut blst_p2, n: usize) {
    unsafe { release(p, n) }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::ptr::NonNull;

    #[test]
    fn malloc_writes_zeroed_buffer() {
        let mut p: *mut c_void = ptr::null_mut();
        assert_eq!(ckzg_malloc(&mut p, 64), CKzgRet::Ok as i32);
        assert!(!p.is_null());
        let bytes = unsafe { std::slice::from_raw_parts(p.cast::<u8>(), 64) };
        assert!(bytes.iter().all(|&b| b == 0));
        unsafe { ckzg_free(p, 64) };
    }

    #[test]
    fn typed_allocations_round_trip() {
        let mut fr: *mut blst_fr = ptr::null_mut();
        let mut p1: *mut blst_p1 = ptr::null_mut();
        let mut p2: *mut blst_p2 = ptr::null_mut();
        assert_eq!(ckzg_new_fr(&mut fr, 16), CKzgRet::Ok as i32);
        assert_eq!(ckzg_new_p1(&mut p1, 16), CKzgRet::Ok as i32);
        assert_eq!(ckzg_new_p2(&mut p2, 16), CKzgRet::Ok as i32);

        let frs = unsafe { std::slice::from_raw_parts_mut(fr, 16) };
        frs[15].l[0] = 9;
        assert_eq!(frs[0], blst_fr::default());
        let p2s = unsafe { std::slice::from_raw_parts(p2, 16) };
        assert!(p2s.iter().all(|p| *p == blst_p2::default()));

        unsafe {
            ckzg_free_fr(fr, 16);
            ckzg_free_p1(p1, 16);
            ckzg_free_p2(p2, 16);
        }
    }

    #[test]
    fn null_out_is_bad_args() {
        assert_eq!(ckzg_malloc(ptr::null_mut(), 8), CKzgRet::BadArgs as i32);
        assert_eq!(ckzg_new_fr(ptr::null_mut(), 8), CKzgRet::BadArgs as i32);
        assert_eq!(ckzg_new_p1(ptr::null_mut(), 8), CKzgRet::BadArgs as i32);
        assert_eq!(ckzg_new_p2(ptr::null_mut(), 8), CKzgRet::BadArgs as i32);
    }

    #[test]
    fn zero_count_yields_null_and_ok() {
        let mut p1: *mut blst_p1 = NonNull::dangling().as_ptr();
        assert_eq!(ckzg_new_p1(&mut p1, 0), CKzgRet::Ok as i32);
        assert!(p1.is_null());
        unsafe { ckzg_free_p1(p1, 0) };
    }

    #[test]
    fn overflow_is_malloc_and_leaves_out_untouched() {
        let sentinel: *mut blst_p2 = NonNull::dangling().as_ptr();
        let mut p2 = sentinel;
        let status = ckzg_new_p2(&mut p2, usize::MAX / 288 + 1);
        assert_eq!(status, CKzgRet::Malloc as i32);
        assert_eq!(p2, sentinel);

        let sentinel: *mut blst_fr = NonNull::dangling().as_ptr();
        let mut fr = sentinel;
        assert_eq!(ckzg_new_fr(&mut fr, usize::MAX), CKzgRet::Malloc as i32);
        assert_eq!(fr, sentinel);
    }

    #[test]
    fn unsatisfiable_byte_request_is_malloc() {
        let mut p: *mut c_void = ptr::null_mut();
        assert_eq!(ckzg_malloc(&mut p, usize::MAX), CKzgRet::Malloc as i32);
        assert!(p.is_null());
    }

    #[test]
    fn free_null_is_noop() {
        unsafe {
            ckzg_free(ptr::null_mut(), 10);
            ckzg_free_fr(ptr::null_mut(), 10);
            ckzg_free_p1(ptr::null_mut(), 10);
            ckzg_free_p2(ptr::null_mut(), 10);
        }
    }

    #[test]
    fn panic_inside_guard_becomes_error() {
        fn boom() -> i32 {
            ffi_guard!({
                if true {
                    panic!("deliberate panic for the guard test");
                }
                CKzgRet::Ok as i32
            })
        }
        assert_eq!(boom(), CKzgRet::Error as i32);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn new_and_free_any_small_count(n in 1usize..512) {
                let mut fr: *mut blst_fr = ptr::null_mut();
                prop_assert_eq!(ckzg_new_fr(&mut fr, n), CKzgRet::Ok as i32);
                prop_assert!(!fr.is_null());
                let frs = unsafe { std::slice::from_raw_parts(fr, n) };
                prop_assert_eq!(frs.len(), n);
                unsafe { ckzg_free_fr(fr, n) };
            }
        }
    }
}
