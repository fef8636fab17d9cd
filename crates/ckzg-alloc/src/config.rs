//! Allocator configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a capped allocator.
///
/// Validated at construction of the allocator; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocConfig {
    /// Largest single request, in bytes, the allocator will attempt.
    ///
    /// Default: `isize::MAX`, the largest object Rust can allocate.
    /// Must be non-zero; zero-length requests never consult the ceiling.
    pub max_request_bytes: usize,
}

impl AllocConfig {
    /// Default per-request ceiling.
    pub const DEFAULT_MAX_REQUEST_BYTES: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_request_bytes: Self::DEFAULT_MAX_REQUEST_BYTES,
        }
    }

    /// Create a config with the given per-request ceiling.
    pub fn with_max_request_bytes(max_request_bytes: usize) -> Self {
        Self { max_request_bytes }
    }

    /// Check all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_request_bytes == 0 {
            return Err(ConfigError::ZeroRequestCeiling);
        }
        Ok(())
    }
}

impl Default for AllocConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected during [`AllocConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_request_bytes` is zero, which would refuse every allocation.
    ZeroRequestCeiling,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRequestCeiling => write!(f, "max_request_bytes must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
