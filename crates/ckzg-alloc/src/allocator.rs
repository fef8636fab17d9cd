//! The generic allocator and its typed specialisations.
//!
//! Every allocation takes the same path: build an [`AllocRequest`] (the
//! overflow check), then hand it to the generic leaf, which asks the
//! [`MemorySource`] for permission, reserves exactly `count` elements
//! without aborting on failure, and zero-fills them. The typed allocators
//! differ only in the element type they pass down.

use ckzg_core::{AllocError, AllocRequest, Element, Fr, MemorySource, G1, G2};

use crate::config::{AllocConfig, ConfigError};
use crate::source::{CappedHeap, SystemHeap};

static SYSTEM: Allocator<SystemHeap> = Allocator::new();

/// An allocator backed by a [`MemorySource`].
///
/// Holds no mutable state of its own; share it by reference across
/// threads if the source is `Sync`.
#[derive(Clone, Debug, Default)]
pub struct Allocator<S = SystemHeap> {
    source: S,
}

impl Allocator<SystemHeap> {
    /// An allocator over the process heap.
    pub const fn new() -> Self {
        Self { source: SystemHeap }
    }

    /// The process-wide heap allocator used by the free functions.
    pub fn system() -> &'static Self {
        &SYSTEM
    }
}

impl Allocator<CappedHeap> {
    /// An allocator over the process heap that refuses requests larger
    /// than `config.max_request_bytes`.
    pub fn from_config(config: &AllocConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_source(CappedHeap::from_config(config)?))
    }
}

impl<S: MemorySource> Allocator<S> {
    /// An allocator over an arbitrary memory source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The memory source this allocator consults.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the allocator, returning its memory source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Allocate `count` zero-initialised elements of `T`.
    ///
    /// Returns a slice of exactly `count` elements, or
    /// [`AllocError::ResourceExhausted`] if `count * size_of::<T>()`
    /// overflows, the memory source refuses the request, or the heap
    /// cannot supply it.
    pub fn allocate<T: Element>(&self, count: usize) -> Result<Box<[T]>, AllocError> {
        let request = AllocRequest::new::<T>(count)?;
        self.acquire(&request)
    }

    /// Allocate `n` zeroed bytes.
    pub fn allocate_bytes(&self, n: usize) -> Result<Box<[u8]>, AllocError> {
        self.allocate(n)
    }

    /// Allocate `count` scalar-field elements.
    pub fn allocate_fr(&self, count: usize) -> Result<Box<[Fr]>, AllocError> {
        self.allocate(count)
    }

    /// Allocate `count` G1 points.
    pub fn allocate_g1(&self, count: usize) -> Result<Box<[G1]>, AllocError> {
        self.allocate(count)
    }

    /// Allocate `count` G2 points.
    pub fn allocate_g2(&self, count: usize) -> Result<Box<[G2]>, AllocError> {
        self.allocate(count)
    }

    fn acquire<T: Element>(&self, request: &AllocRequest) -> Result<Box<[T]>, AllocError> {
        debug_assert_eq!(request.kind(), T::KIND);
        // Empty requests need no memory and always succeed.
        if request.count() == 0 {
            return Ok(Box::default());
        }
        self.source.admit(request)?;
        let mut buf: Vec<T> = Vec::new();
        buf.try_reserve_exact(request.count())
            .map_err(|_| request.exhausted())?;
        buf.resize_with(request.count(), T::default);
        Ok(buf.into_boxed_slice())
    }
}

/// Allocate `n` zeroed bytes from the process heap.
pub fn allocate_bytes(n: usize) -> Result<Box<[u8]>, AllocError> {
    SYSTEM.allocate_bytes(n)
}

/// Allocate `count` zeroed scalar-field elements from the process heap.
pub fn allocate_fr(count: usize) -> Result<Box<[Fr]>, AllocError> {
    SYSTEM.allocate_fr(count)
}

/// Allocate `count` zeroed G1 points from the process heap.
pub fn allocate_g1(count: usize) -> Result<Box<[G1]>, AllocError> {
    SYSTEM.allocate_g1(count)
}

/// Allocate `count` zeroed G2 points from the process heap.
pub fn allocate_g2(count: usize) -> Result<Box<[G2]>, AllocError> {
    SYSTEM.allocate_g2(count)
}
