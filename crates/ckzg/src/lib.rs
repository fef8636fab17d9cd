//! ckzg: typed, fallible allocation for KZG polynomial commitment buffers.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! ckzg sub-crates. The C ABI lives separately in `ckzg-ffi`.
//!
//! # Quick start
//!
//! ```rust
//! use ckzg::prelude::*;
//!
//! // A blob's worth of scalar-field elements, zero-initialised.
//! let poly = allocate_fr(4096).unwrap();
//! assert_eq!(poly.len(), 4096);
//!
//! // Counts whose byte size overflows are reported, never truncated.
//! let err = allocate_g1(usize::MAX).unwrap_err();
//! assert!(matches!(err, AllocError::ResourceExhausted { .. }));
//!
//! // Zero-length requests succeed with an empty slice.
//! assert!(allocate_g2(0).unwrap().is_empty());
//!
//! // An allocator with a per-request ceiling.
//! let capped = Allocator::from_config(&AllocConfig::with_max_request_bytes(1024)).unwrap();
//! assert!(capped.allocate_bytes(2048).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ckzg-core` | Element types, requests, errors, `MemorySource` |
//! | [`memory`] | `ckzg-alloc` | Allocators, memory sources, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element types, allocation requests and errors (`ckzg-core`).
///
/// Implement [`types::MemorySource`] to control which requests an
/// allocator admits.
pub use ckzg_core as types;

/// Allocators and memory sources (`ckzg-alloc`).
///
/// [`memory::Allocator`] over [`memory::SystemHeap`] or
/// [`memory::CappedHeap`], plus the free functions over the process heap.
pub use ckzg_alloc as memory;

/// Common imports for typical ckzg usage.
///
/// ```rust
/// use ckzg::prelude::*;
/// ```
pub mod prelude {
    // Allocation
    pub use ckzg_alloc::{
        allocate_bytes, allocate_fr, allocate_g1, allocate_g2, AllocConfig, Allocator,
        CappedHeap, SystemHeap,
    };

    // Core types and errors
    pub use ckzg_core::{AllocError, AllocRequest, Element, ElementKind, Fr, MemorySource, G1, G2};
}
