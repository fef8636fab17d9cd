//! Test utilities and memory-source fixtures for ckzg development.
//!
//! Provides [`MemorySource`] implementations that observe or refuse
//! requests, so allocator tests can simulate exhaustion without actually
//! running out of memory:
//!
//! - [`AdmitAll`]: accepts everything.
//! - [`RecordingSource`]: logs every request it sees, then delegates.
//! - [`ExhaustedSource`]: refuses everything.
//! - [`fixtures::FailAfter`]: refuses deterministically after N requests.
//! - [`fixtures::FlakySource`]: refuses at a seeded random rate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailAfter, FlakySource};

use std::sync::{Mutex, MutexGuard, PoisonError};

use ckzg_core::{AllocError, AllocRequest, ElementKind, MemorySource};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Byte sizes seen for one element kind, in arrival order.
pub type ByteLog = SmallVec<[usize; 4]>;

/// Accepts every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdmitAll;

impl MemorySource for AdmitAll {
    fn admit(&self, _request: &AllocRequest) -> Result<(), AllocError> {
        Ok(())
    }
}

/// Refuses every request, as if the heap were already full.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustedSource;

impl MemorySource for ExhaustedSource {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        Err(request.exhausted())
    }
}

/// Records every request it is asked to admit, then defers to `inner`.
///
/// Requests that never reach the source (overflowing or empty ones) do not
/// appear in the log, which is what tests check for.
pub struct RecordingSource<S = AdmitAll> {
    inner: S,
    log: Mutex<Vec<AllocRequest>>,
}

impl RecordingSource<AdmitAll> {
    pub fn new() -> Self {
        Self::wrapping(AdmitAll)
    }
}

impl Default for RecordingSource<AdmitAll> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RecordingSource<S> {
    /// Record requests and pass them on to `inner`.
    pub fn wrapping(inner: S) -> Self {
        Self {
            inner,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<AllocRequest> {
        self.lock().clone()
    }

    /// Byte sizes seen so far, grouped by element kind in first-seen order.
    pub fn bytes_by_kind(&self) -> IndexMap<ElementKind, ByteLog> {
        let mut grouped: IndexMap<ElementKind, ByteLog> = IndexMap::new();
        for request in self.lock().iter() {
            grouped
                .entry(request.kind())
                .or_default()
                .push(request.bytes());
        }
        grouped
    }

    /// Forget all recorded requests.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AllocRequest>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: MemorySource> MemorySource for RecordingSource<S> {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        self.lock().push(*request);
        self.inner.admit(request)
    }
}
