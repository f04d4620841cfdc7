//! JSON file store
//!
//! Keeps the records of one entity type in memory and rewrites a JSON array
//! file on every mutation. Meant for single-process local deployments where
//! PostgreSQL is overkill. Like the in-memory store it does not enforce key
//! uniqueness.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::JsonFileStore;
//! use domain_company::Company;
//!
//! let store = JsonFileStore::<Company>::open("data/companies.json").await?;
//! ```

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::{fs, sync::RwLock};
use tracing::{debug, info};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, KeyFilter, PortError, Record,
    Store,
};

use crate::error::DatabaseError;

/// File-backed implementation of [`Store`]
#[derive(Debug)]
pub struct JsonFileStore<R> {
    records: Arc<RwLock<Vec<R>>>,
    file_path: PathBuf,
}

impl<R> Clone for JsonFileStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            file_path: self.file_path.clone(),
        }
    }
}

impl<R> JsonFileStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    /// Opens the store at `path`, creating an empty file if none exists
    ///
    /// # Errors
    ///
    /// `DatabaseError::Io` if the file or its directory cannot be created or
    /// read, `DatabaseError::SerializationError` if the file is not a JSON
    /// array of records.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let records: Vec<R> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write_records::<R>(&file_path, &[]).await?;
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %file_path.display(),
            entity = R::ENTITY,
            count = records.len(),
            "Opened JSON file store"
        );

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
            file_path,
        })
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Applies `mutate` to a copy of the records, persists it, then commits
    ///
    /// The in-memory state only changes once the file has been written.
    async fn mutate<T>(&self, mutate: impl FnOnce(&mut Vec<R>) -> T) -> Result<T, PortError> {
        let mut records = self.records.write().await;
        let mut next = records.clone();
        let outcome = mutate(&mut next);
        write_records(&self.file_path, &next).await?;
        *records = next;
        Ok(outcome)
    }
}

async fn write_records<R: Serialize>(path: &Path, records: &[R]) -> Result<(), DatabaseError> {
    let data = serde_json::to_vec_pretty(records)?;
    fs::write(path, data).await?;
    Ok(())
}

impl<R: Record> DomainPort for JsonFileStore<R> {}

#[async_trait]
impl<R> HealthCheckable for JsonFileStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn health_check(&self) -> HealthCheckResult {
        let adapter_id = format!("json-file-{}-store", R::ENTITY.to_lowercase());
        match fs::metadata(&self.file_path).await {
            Ok(_) => HealthCheckResult::healthy(adapter_id),
            Err(e) => HealthCheckResult {
                adapter_id,
                status: AdapterHealth::Unhealthy,
                latency_ms: 0,
                message: Some(format!("{}: {}", self.file_path.display(), e)),
                checked_at: chrono::Utc::now(),
            },
        }
    }
}

#[async_trait]
impl<R> Store<R> for JsonFileStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
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
        debug!(key = %record.key(), "Appending record to file store");
        self.mutate(|records| records.push(record)).await?;
        Ok(true)
    }

    async fn update(&self, record: R) -> Result<bool, PortError> {
        let key = record.key();
        if !self.records.read().await.iter().any(|r| r.key() == key) {
            return Ok(false);
        }

        self.mutate(|records| match records.iter_mut().find(|r| r.key() == key) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        })
        .await
    }

    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError> {
        let removed = self
            .mutate(|records| {
                let before = records.len();
                records.retain(|r| !filter.matches(&r.key()));
                (before - records.len()) as u64
            })
            .await?;
        debug!(removed, filter = %filter, "Removed records from file store");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_employee::Employee;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_file_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_mutations_persist_across_reopen() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = JsonFileStore::<Employee>::open(&path).await?;
        assert!(store.find_all().await?.is_empty());

        store.insert(Employee::new("S1", "E1").with_name("Ana")).await?;
        store.insert(Employee::new("S1", "E2").with_name("Ben")).await?;
        assert!(store.update(Employee::new("S1", "E1").with_name("Ana K")).await?);
        assert_eq!(store.delete(&KeyFilter::by_code("E2")).await?, 1);

        let reopened = JsonFileStore::<Employee>::open(&path).await?;
        let all = reopened.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].employee_name.as_deref(), Some("Ana K"));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_update_of_missing_key_leaves_file_alone() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = JsonFileStore::<Employee>::open(&path).await?;

        assert!(!store.update(Employee::new("S1", "E9")).await?);
        assert!(store.find_all().await?.is_empty());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() -> Result<(), anyhow::Error> {
        let path = temp_path();
        tokio::fs::write(&path, b"{ not a list").await?;

        let err = JsonFileStore::<Employee>::open(&path).await.unwrap_err();
        assert!(matches!(err, DatabaseError::SerializationError(_)));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_identity_is_rejected() -> Result<(), anyhow::Error> {
        let path = temp_path();
        let store = JsonFileStore::<Employee>::open(&path).await?;

        let err = store.insert(Employee::new("", "E1")).await.unwrap_err();
        assert!(err.is_invalid_argument());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
