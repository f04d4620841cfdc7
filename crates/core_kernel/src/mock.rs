//! Recording store for tests
//!
//! Wraps a [`MemoryStore`] and counts every call, so tests can assert that an
//! operation was rejected before it reached the store. It can also be told to
//! fail, to check that store failures travel up unchanged.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::memory::MemoryStore;
use crate::ports::{DomainPort, HealthCheckResult, HealthCheckable, AdapterHealth, PortError};
use crate::store::{KeyFilter, Record, Store};

/// Per-operation call counters
#[derive(Debug, Default)]
pub struct CallCounts {
    pub find_all: AtomicUsize,
    pub find: AtomicUsize,
    pub insert: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl CallCounts {
    /// Total number of calls of any kind
    pub fn total(&self) -> usize {
        self.find_all.load(Ordering::SeqCst)
            + self.find.load(Ordering::SeqCst)
            + self.insert.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }

    /// Number of write calls (insert, update, delete)
    pub fn writes(&self) -> usize {
        self.insert.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }
}

/// A memory store that records calls and can simulate backend failure
#[derive(Debug)]
pub struct RecordingStore<R> {
    inner: MemoryStore<R>,
    calls: Arc<CallCounts>,
    failing: Arc<AtomicBool>,
}

impl<R> Clone for RecordingStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            calls: Arc::clone(&self.calls),
            failing: Arc::clone(&self.failing),
        }
    }
}

impl<R: Record> Default for RecordingStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordingStore<R> {
    /// Creates an empty recording store
    pub fn new() -> Self {
        Self::wrap(MemoryStore::new())
    }

    /// Wraps an existing memory store
    pub fn wrap(inner: MemoryStore<R>) -> Self {
        Self {
            inner,
            calls: Arc::new(CallCounts::default()),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the call counters
    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    /// Returns the wrapped memory store
    pub fn inner(&self) -> &MemoryStore<R> {
        &self.inner
    }

    /// Makes every following call fail with a store failure
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self, counter: &AtomicUsize) -> Result<(), PortError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(PortError::store_failure("simulated backend outage"));
        }
        Ok(())
    }
}

impl<R: Record> DomainPort for RecordingStore<R> {}

#[async_trait]
impl<R: Record> HealthCheckable for RecordingStore<R> {
    async fn health_check(&self) -> HealthCheckResult {
        let mut result = HealthCheckResult::healthy("recording-store");
        if self.failing.load(Ordering::SeqCst) {
            result.status = AdapterHealth::Unhealthy;
            result.message = Some("simulated backend outage".to_string());
        }
        result
    }
}

#[async_trait]
impl<R: Record> Store<R> for RecordingStore<R> {
    async fn find_all(&self) -> Result<Vec<R>, PortError> {
        self.enter(&self.calls.find_all)?;
        self.inner.find_all().await
    }

    async fn find(&self, filter: &KeyFilter) -> Result<Vec<R>, PortError> {
        self.enter(&self.calls.find)?;
        self.inner.find(filter).await
    }

    async fn insert(&self, record: R) -> Result<bool, PortError> {
        self.enter(&self.calls.insert)?;
        self.inner.insert(record).await
    }

    async fn update(&self, record: R) -> Result<bool, PortError> {
        self.enter(&self.calls.update)?;
        self.inner.update(record).await
    }

    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError> {
        self.enter(&self.calls.delete)?;
        self.inner.delete(filter).await
    }
}
