//! Checked allocation requests.
//!
//! An [`AllocRequest`] is the only way to obtain a byte size from an
//! element count. Construction fails instead of wrapping, so a memory
//! source is never asked for fewer bytes than the caller needs.

use std::mem::size_of;

use crate::element::{Element, ElementKind};
use crate::error::AllocError;

/// A validated request for `count` elements of one kind.
///
/// Invariant: `bytes == count * kind.size()` with no wrap-around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocRequest {
    kind: ElementKind,
    count: usize,
    bytes: usize,
}

impl AllocRequest {
    /// Build a request for `count` elements of `T`.
    ///
    /// Returns [`AllocError::ResourceExhausted`] with `bytes: None` if
    /// `count * size_of::<T>()` does not fit in `usize`.
    pub fn new<T: Element>(count: usize) -> Result<Self, AllocError> {
        match count.checked_mul(size_of::<T>()) {
            Some(bytes) => Ok(Self {
                kind: T::KIND,
                count,
                bytes,
            }),
            None => Err(AllocError::ResourceExhausted {
                kind: T::KIND,
                count,
                bytes: None,
            }),
        }
    }

    /// Element kind requested.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of elements requested.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total size of the request in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// True if the request needs no memory at all.
    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// The error to report when this request cannot be satisfied.
    pub fn exhausted(&self) -> AllocError {
        AllocError::ResourceExhausted {
            kind: self.kind,
            count: self.count,
            bytes: Some(self.bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Fr, G1, G2};

    #[test]
    fn byte_request_size_equals_count() {
        let req = AllocRequest::new::<u8>(100).unwrap();
        assert_eq!(req.kind(), ElementKind::Byte);
        assert_eq!(req.bytes(), 100);
    }

    #[test]
    fn typed_requests_scale_by_element_size() {
        assert_eq!(AllocRequest::new::<Fr>(3).unwrap().bytes(), 96);
        assert_eq!(AllocRequest::new::<G1>(3).unwrap().bytes(), 432);
        assert_eq!(AllocRequest::new::<G2>(3).unwrap().bytes(), 864);
    }

    #[test]
    fn zero_count_is_empty() {
        let req = AllocRequest::new::<G2>(0).unwrap();
        assert!(req.is_empty());
        assert_eq!(req.count(), 0);
    }

    #[test]
    fn one_past_max_count_overflows() {
        let err = AllocRequest::new::<Fr>(usize::MAX / 32 + 1).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.kind(), ElementKind::Fr);

        let err = AllocRequest::new::<G1>(usize::MAX / 144 + 1).unwrap_err();
        assert!(err.is_overflow());

        let err = AllocRequest::new::<G2>(usize::MAX / 288 + 1).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn max_count_does_not_overflow() {
        let req = AllocRequest::new::<G2>(ElementKind::G2.max_count()).unwrap();
        assert_eq!(req.count(), usize::MAX / 288);
        assert_eq!(req.bytes(), (usize::MAX / 288) * 288);
    }

    #[test]
    fn bytes_never_overflow_for_u8() {
        assert_eq!(AllocRequest::new::<u8>(usize::MAX).unwrap().bytes(), usize::MAX);
    }

    #[test]
    fn exhausted_reports_request_context() {
        let req = AllocRequest::new::<G1>(10).unwrap();
        let err = req.exhausted();
        assert_eq!(err.count(), 10);
        assert_eq!(err.bytes(), Some(1440));
        assert!(!err.is_overflow());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn request_succeeds_iff_product_fits(count in any::<usize>()) {
                for kind in ElementKind::ALL {
                    let result = match kind {
                        ElementKind::Byte => AllocRequest::new::<u8>(count),
                        ElementKind::Fr => AllocRequest::new::<Fr>(count),
                        ElementKind::G1 => AllocRequest::new::<G1>(count),
                        ElementKind::G2 => AllocRequest::new::<G2>(count),
                    };
                    match count.checked_mul(kind.size()) {
                        Some(bytes) => {
                            let req = result.unwrap();
                            prop_assert_eq!(req.bytes(), bytes);
                            prop_assert_eq!(req.kind(), kind);
                        }
                        None => prop_assert!(result.unwrap_err().is_overflow()),
                    }
                }
            }
        }
    }
}
