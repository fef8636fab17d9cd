//! Benchmark workloads for the ckzg allocation layer.
//!
//! Provides allocation profiles shaped like real KZG usage:
//!
//! - [`blob_profile`]: one EIP-4844 blob worth of field elements
//! - [`trusted_setup_profile`]: the G1/G2 tables of a mainnet trusted setup
//! - [`allocate_profile`]: allocate every buffer a profile describes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ckzg_alloc::Allocator;
use ckzg_core::{AllocError, Fr, MemorySource, G1, G2};

/// Field elements in one blob.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// Bytes in one serialised blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * 32;

/// G2 points in the mainnet trusted setup.
pub const TRUSTED_SETUP_G2_POINTS: usize = 65;

/// Element counts for one round of allocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocProfile {
    /// Raw bytes.
    pub bytes: usize,
    /// Scalar-field elements.
    pub fr: usize,
    /// G1 points.
    pub g1: usize,
    /// G2 points.
    pub g2: usize,
}

/// Buffers produced by [`allocate_profile`].
pub struct ProfileBuffers {
    /// Raw bytes.
    pub bytes: Box<[u8]>,
    /// Scalar-field elements.
    pub fr: Box<[Fr]>,
    /// G1 points.
    pub g1: Box<[G1]>,
    /// G2 points.
    pub g2: Box<[G2]>,
}

/// A serialised blob plus its decoded polynomial.
pub fn blob_profile() -> AllocProfile {
    AllocProfile {
        bytes: BYTES_PER_BLOB,
        fr: FIELD_ELEMENTS_PER_BLOB,
        g1: 0,
        g2: 0,
    }
}

/// Monomial and Lagrange G1 tables plus the G2 powers of tau.
pub fn trusted_setup_profile() -> AllocProfile {
    AllocProfile {
        bytes: 0,
        fr: FIELD_ELEMENTS_PER_BLOB,
        g1: 2 * FIELD_ELEMENTS_PER_BLOB,
        g2: TRUSTED_SETUP_G2_POINTS,
    }
}

/// Allocate every buffer in `profile`, stopping at the first failure.
pub fn allocate_profile<S: MemorySource>(
    alloc: &Allocator<S>,
    profile: &AllocProfile,
) -> Result<ProfileBuffers, AllocError> {
    Ok(ProfileBuffers {
        bytes: alloc.allocate_bytes(profile.bytes)?,
        fr: alloc.allocate_fr(profile.fr)?,
        g1: alloc.allocate_g1(profile.g1)?,
        g2: alloc.allocate_g2(profile.g2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_setup_profile_allocates() {
        let bufs = allocate_profile(Allocator::system(), &trusted_setup_profile()).unwrap();
        assert_eq!(bufs.g1.len(), 8192);
        assert_eq!(bufs.g2.len(), 65);
        assert!(bufs.bytes.is_empty());
    }

    #[test]
    fn blob_profile_sizes() {
        let p = blob_profile();
        assert_eq!(p.bytes, 131_072);
        assert_eq!(p.fr, 4096);
    }
}
