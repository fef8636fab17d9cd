//! Core abstraction traits.

use crate::error::AllocError;
use crate::request::AllocRequest;

/// Where allocator memory comes from.
///
/// Allocators consult their source once per allocation, after the byte
/// size has been checked for overflow and before any memory is reserved.
/// A source that returns an error makes the allocation fail with that
/// error and no buffer is produced.
///
/// Implementations are shared across threads by reference, so `admit`
/// takes `&self`.
pub trait MemorySource {
    /// Accept or refuse a request.
    ///
    /// `request.bytes()` is always the exact, non-wrapped size.
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError>;
}

impl<S: MemorySource + ?Sized> MemorySource for &S {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        (**self).admit(request)
    }
}

impl<S: MemorySource + ?Sized> MemorySource for Box<S> {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        (**self).admit(request)
    }
}

impl<S: MemorySource + ?Sized> MemorySource for std::sync::Arc<S> {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        (**self).admit(request)
    }
}
