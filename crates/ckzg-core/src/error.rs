//! The allocation error type.

use std::error::Error;
use std::fmt;

use crate::element::ElementKind;

/// Errors returned by every allocator in the layer.
///
/// There is exactly one failure kind. It covers both a byte size that
/// cannot be represented and a memory source that cannot supply the
/// requested bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The request could not be satisfied (`C_KZG_MALLOC` across the C ABI).
    ResourceExhausted {
        /// Kind of element requested.
        kind: ElementKind,
        /// Number of elements requested.
        count: usize,
        /// Requested size in bytes, or `None` if `count * size` overflowed.
        bytes: Option<usize>,
    },
}

impl AllocError {
    /// The element kind of the failed request.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::ResourceExhausted { kind, .. } => *kind,
        }
    }

    /// The element count of the failed request.
    pub fn count(&self) -> usize {
        match self {
            Self::ResourceExhausted { count, .. } => *count,
        }
    }

    /// The byte size of the failed request, if it was representable.
    pub fn bytes(&self) -> Option<usize> {
        match self {
            Self::ResourceExhausted { bytes, .. } => *bytes,
        }
    }

    /// Whether the failure came from the byte-size computation overflowing
    /// rather than from memory running out.
    pub fn is_overflow(&self) -> bool {
        self.bytes().is_none()
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted {
                kind,
                count,
                bytes: None,
            } => {
                write!(
                    f,
                    "resource exhausted: {count} {kind} elements of {} bytes overflow the byte range",
                    kind.size()
                )
            }
            Self::ResourceExhausted {
                kind,
                count,
                bytes: Some(bytes),
            } => {
                write!(
                    f,
                    "resource exhausted: cannot allocate {bytes} bytes for {count} {kind} elements"
                )
            }
        }
    }
}

impl Error for AllocError {}
