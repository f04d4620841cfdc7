//! In-memory store
//!
//! Keeps records in a vector behind an async `RwLock`. Used as the default
//! backend for local runs and as the fake store in tests. Like every store it
//! does not enforce key uniqueness: inserting the same key twice keeps both.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::ports::{DomainPort, HealthCheckResult, HealthCheckable, PortError};
use crate::store::{KeyFilter, Record, Store};

/// Vector-backed implementation of [`Store`]
#[derive(Debug)]
pub struct MemoryStore<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R> Clone for MemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Record> MemoryStore<R> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, skipping identity checks
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Returns the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<R: Record> DomainPort for MemoryStore<R> {}

#[async_trait]
impl<R: Record> HealthCheckable for MemoryStore<R> {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(format!("memory-{}-store", R::ENTITY.to_lowercase()))
    }
}

#[async_trait]
impl<R: Record> Store<R> for MemoryStore<R> {
    async fn find_all(&self) -> Result<Vec<R>, PortError> {
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, filter: &KeyFilter) -> Result<Vec<R>, PortError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| filter.matches(&r.key()))
            .cloned()
            .collect())
    }

    async fn insert(&self, record: R) -> Result<bool, PortError> {
        record.validate_identity()?;
        debug!(entity = R::ENTITY, key = %record.key(), "memory insert");
        self.records.write().await.push(record);
        Ok(true)
    }

    async fn update(&self, record: R) -> Result<bool, PortError> {
        let key = record.key();
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !filter.matches(&r.key()));
        Ok((before - records.len()) as u64)
    }
}
