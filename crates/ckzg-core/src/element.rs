//! Element types handed out by the allocators.
//!
//! The three curve types are the `blst` representations used throughout a
//! BLS12-381 KZG implementation. Only their layout matters here: the
//! allocation layer never performs field or group arithmetic on them.

use std::fmt;
use std::mem::size_of;

/// A scalar-field element of BLS12-381 (four 64-bit limbs).
pub type Fr = blst::blst_fr;

/// A point in G1, the group over the base field, in projective coordinates.
pub type G1 = blst::blst_p1;

/// A point in G2, the group over the quadratic extension, in projective
/// coordinates.
pub type G2 = blst::blst_p2;

/// The kinds of element the allocation layer knows how to size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// Untyped bytes.
    Byte,
    /// Scalar-field element ([`Fr`]).
    Fr,
    /// First pairing group point ([`G1`]).
    G1,
    /// Second pairing group point ([`G2`]).
    G2,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 4] = [Self::Byte, Self::Fr, Self::G1, Self::G2];

    /// Size in bytes of one element of this kind.
    pub const fn size(self) -> usize {
        match self {
            Self::Byte => size_of::<u8>(),
            Self::Fr => size_of::<Fr>(),
            Self::G1 => size_of::<G1>(),
            Self::G2 => size_of::<G2>(),
        }
    }

    /// Short lowercase name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Fr => "fr",
            Self::G1 => "g1",
            Self::G2 => "g2",
        }
    }

    /// Largest element count whose byte size still fits in `usize`.
    pub const fn max_count(self) -> usize {
        usize::MAX / self.size()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type the allocators can hand out in bulk.
///
/// `Default::default()` must produce the all-zero element: freshly
/// allocated buffers are filled with it. `KIND` must describe `Self`, so
/// that `KIND.size() == size_of::<Self>()`.
pub trait Element: Default + Sized {
    /// The kind reported in requests and errors.
    const KIND: ElementKind;
}

impl Element for u8 {
    const KIND: ElementKind = ElementKind::Byte;
}

impl Element for Fr {
    const KIND: ElementKind = ElementKind::Fr;
}

impl Element for G1 {
    const KIND: ElementKind = ElementKind::G1;
}

impl Element for G2 {
    const KIND: ElementKind = ElementKind::G2;
}
