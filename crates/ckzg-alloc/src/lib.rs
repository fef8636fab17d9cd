//! Fallible, overflow-checked allocators for KZG field elements and curve
//! points.
//!
//! One generic allocator hands out zero-initialised, exclusively owned
//! boxed slices; three typed allocators specialise it for scalar-field
//! elements ([`Fr`]), G1 points ([`G1`]) and G2 points ([`G2`]). Every
//! failure, whether the byte size overflowed or memory ran out, is reported
//! as [`AllocError::ResourceExhausted`] and never produces a partial buffer.
//!
//! # Architecture
//!
//! ```text
//! allocate_fr / allocate_g1 / allocate_g2 / allocate_bytes
//! └── Allocator::allocate::<T>     (AllocRequest: checked count * size)
//!     └── acquire                  (generic leaf)
//!         ├── MemorySource::admit  (SystemHeap, CappedHeap, test fixtures)
//!         └── Vec::try_reserve_exact + zero fill
//! ```
//!
//! # Zero-length requests
//!
//! A request for zero elements always succeeds with an empty slice and
//! never reaches the memory source.
//!
//! ```
//! let frs = ckzg_alloc::allocate_fr(4096).unwrap();
//! assert_eq!(frs.len(), 4096);
//!
//! let err = ckzg_alloc::allocate_g2(usize::MAX).unwrap_err();
//! assert!(err.is_overflow());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod source;

pub use allocator::{allocate_bytes, allocate_fr, allocate_g1, allocate_g2, Allocator};
pub use ckzg_core::{AllocError, AllocRequest, Element, ElementKind, Fr, MemorySource, G1, G2};
pub use config::{AllocConfig, ConfigError};
pub use source::{CappedHeap, SystemHeap};
