//! Core types and traits for the ckzg allocation layer.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! element types a KZG library over BLS12-381 keeps in bulk (scalar-field
//! elements and points of both pairing groups), the [`AllocRequest`] that
//! turns an element count into a checked byte size, the single
//! [`AllocError`] kind every allocator reports, and the [`MemorySource`]
//! seam allocators consult before touching the heap.
//!
//! Allocation itself lives in `ckzg-alloc`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod request;
pub mod traits;

pub use element::{Element, ElementKind, Fr, G1, G2};
pub use error::AllocError;
pub use request::AllocRequest;
pub use traits::MemorySource;
