//! Production memory sources.
//!
//! Both sources are stateless, so one instance can back any number of
//! concurrent allocations. Test sources that simulate exhaustion live in
//! `ckzg-test-utils`.

use ckzg_core::{AllocError, AllocRequest, MemorySource};

use crate::config::{AllocConfig, ConfigError};

/// The process heap.
///
/// Admits every request. Genuine out-of-memory conditions surface from the
/// allocator's fallible reservation, not from here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemHeap;

impl MemorySource for SystemHeap {
    fn admit(&self, _request: &AllocRequest) -> Result<(), AllocError> {
        Ok(())
    }
}

/// The process heap with a per-request byte ceiling.
///
/// Refuses any single request larger than `max_request_bytes`. There is no
/// running total: each request is judged on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CappedHeap {
    max_request_bytes: usize,
}

impl CappedHeap {
    /// Build a capped heap from a validated config.
    pub fn from_config(config: &AllocConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max_request_bytes: config.max_request_bytes,
        })
    }

    /// The configured per-request ceiling in bytes.
    pub fn max_request_bytes(&self) -> usize {
        self.max_request_bytes
    }
}

impl MemorySource for CappedHeap {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        if request.bytes() > self.max_request_bytes {
            return Err(request.exhausted());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckzg_core::{Fr, G1};

    #[test]
    fn system_heap_admits_everything() {
        let req = AllocRequest::new::<u8>(usize::MAX).unwrap();
        assert!(SystemHeap.admit(&req).is_ok());
    }

    #[test]
    fn capped_heap_admits_up_to_ceiling() {
        let heap = CappedHeap::from_config(&AllocConfig::with_max_request_bytes(320)).unwrap();
        assert!(heap.admit(&AllocRequest::new::<Fr>(10).unwrap()).is_ok());
        let err = heap.admit(&AllocRequest::new::<Fr>(11).unwrap()).unwrap_err();
        assert_eq!(err.bytes(), Some(352));
        assert!(!err.is_overflow());
    }

    #[test]
    fn capped_heap_judges_each_request_alone() {
        let heap = CappedHeap::from_config(&AllocConfig::with_max_request_bytes(144)).unwrap();
        let one_point = AllocRequest::new::<G1>(1).unwrap();
        for _ in 0..10 {
            assert!(heap.admit(&one_point).is_ok());
        }
    }

    #[test]
    fn capped_heap_rejects_invalid_config() {
        let result = CappedHeap::from_config(&AllocConfig::with_max_request_bytes(0));
        assert_eq!(result, Err(ConfigError::ZeroRequestCeiling));
    }
}
