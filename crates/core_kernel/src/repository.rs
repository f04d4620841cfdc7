//! Keyed repository with upsert semantics
//!
//! [`Repository`] sits on top of a [`Store`] and adds everything that depends
//! on the composite key: lookup by code, save-or-update, strict update and
//! delete by key. It is shared by every entity type; the entity supplies its
//! merge rule through [`Record::apply_business_fields`].
//!
//! # Upsert
//!
//! `save` looks the record up by its full composite key. When a stored record
//! exists the incoming business fields are merged onto it and the result is
//! written back with `update`; fields the incoming record does not carry keep
//! their stored values. Otherwise the incoming record is inserted.
//!
//! There is no locking between the read and the write. Two callers racing on
//! one key can both insert; the store's own constraints are the only guard.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::identifiers::RecordKey;
use crate::ports::PortError;
use crate::store::{KeyFilter, Record, Store};
use crate::temporal::TimestampPolicy;

/// Source of the current time for server-stamped writes
pub type Clock = fn() -> DateTime<Utc>;

/// Composite-key repository over a generic store
pub struct Repository<R: Record> {
    store: Arc<dyn Store<R>>,
    timestamps: TimestampPolicy,
    clock: Clock,
}

impl<R: Record> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            timestamps: self.timestamps,
            clock: self.clock,
        }
    }
}

impl<R: Record> std::fmt::Debug for Repository<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &R::ENTITY)
            .field("timestamps", &self.timestamps)
            .finish()
    }
}

impl<R: Record> Repository<R> {
    /// Creates a repository with the default timestamp policy
    pub fn new(store: Arc<dyn Store<R>>) -> Self {
        Self {
            store,
            timestamps: TimestampPolicy::default(),
            clock: Utc::now,
        }
    }

    /// Sets how `last_modified` is treated on writes
    pub fn with_timestamps(mut self, timestamps: TimestampPolicy) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Replaces the clock used for server-stamped writes
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the underlying store handle
    pub fn store(&self) -> &Arc<dyn Store<R>> {
        &self.store
    }

    /// Returns every stored record
    #[instrument(skip(self), fields(entity = R::ENTITY))]
    pub async fn get_all(&self) -> Result<Vec<R>, PortError> {
        debug!("Fetching all records");
        self.store.find_all().await
    }

    /// Returns the first record with the business code, on any site
    ///
    /// Zero matches is not an error; the caller decides what absence means.
    #[instrument(skip(self), fields(entity = R::ENTITY))]
    pub async fn get_by_code(&self, code: &str) -> Result<Option<R>, PortError> {
        let found = self.store.find(&KeyFilter::by_code(code)).await?;
        Ok(found.into_iter().next())
    }

    /// Returns the record with the full composite key, if any
    pub async fn find_by_key(&self, key: &RecordKey) -> Result<Option<R>, PortError> {
        let found = self.store.find(&KeyFilter::by_key(key)).await?;
        Ok(found.into_iter().next())
    }

    /// Saves a record: merge onto the stored one if the key exists, else insert
    ///
    /// # Returns
    ///
    /// The store's success flag for whichever write was performed
    ///
    /// # Errors
    ///
    /// `PortError::InvalidArgument` if the record has no identity; store
    /// failures are returned unchanged
    #[instrument(skip(self, entity), fields(entity = R::ENTITY, key = %entity.key()))]
    pub async fn save(&self, entity: R) -> Result<bool, PortError> {
        entity.validate_identity()?;

        match self.find_by_key(&entity.key()).await? {
            Some(existing) => {
                debug!("Record exists, merging business fields");
                let merged = self.merge(existing, &entity);
                self.store.update(merged).await
            }
            None => {
                debug!("No stored record, inserting");
                let mut entity = entity;
                self.timestamps.stamp_insert(&mut entity, (self.clock)());
                self.store.insert(entity).await
            }
        }
    }

    /// Inserts a record without checking whether the key already exists
    #[instrument(skip(self, entity), fields(entity = R::ENTITY, key = %entity.key()))]
    pub async fn add(&self, entity: R) -> Result<(), PortError> {
        entity.validate_identity()?;

        let mut entity = entity;
        self.timestamps.stamp_insert(&mut entity, (self.clock)());
        if !self.store.insert(entity).await? {
            return Err(PortError::store_failure(format!(
                "{} insert was not applied",
                R::ENTITY
            )));
        }
        info!("Record added");
        Ok(())
    }

    /// Merges a record onto the stored one with the same key
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no record has the key; nothing is inserted
    #[instrument(skip(self, entity), fields(entity = R::ENTITY, key = %entity.key()))]
    pub async fn update(&self, entity: R) -> Result<(), PortError> {
        entity.validate_identity()?;
        let key = entity.key();

        let existing = self
            .find_by_key(&key)
            .await?
            .ok_or_else(|| PortError::not_found(R::ENTITY, &key))?;

        let merged = self.merge(existing, &entity);
        if !self.store.update(merged).await? {
            warn!("Record disappeared between lookup and write");
            return Err(PortError::not_found(R::ENTITY, &key));
        }
        info!("Record updated");
        Ok(())
    }

    /// Deletes by the record's composite key, not by the record itself
    ///
    /// # Returns
    ///
    /// The number of records removed
    #[instrument(skip(self, entity), fields(entity = R::ENTITY, key = %entity.key()))]
    pub async fn delete(&self, entity: &R) -> Result<u64, PortError> {
        entity.validate_identity()?;
        let removed = self.store.delete(&KeyFilter::by_key(&entity.key())).await?;
        info!(removed, "Record deleted");
        Ok(removed)
    }

    fn merge(&self, existing: R, incoming: &R) -> R {
        let key = existing.key();
        let mut merged = existing.apply_business_fields(incoming);
        debug_assert_eq!(merged.key(), key, "merge must not change identity");
        self.timestamps.stamp_merge(&mut merged, incoming, (self.clock)());
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        site: String,
        code: String,
        label: Option<String>,
        colour: Option<String>,
        at: Option<DateTime<Utc>>,
    }

    fn tag(site: &str, code: &str, label: Option<&str>, colour: Option<&str>) -> Tag {
        Tag {
            site: site.to_string(),
            code: code.to_string(),
            label: label.map(str::to_string),
            colour: colour.map(str::to_string),
            at: None,
        }
    }

    impl Record for Tag {
        const ENTITY: &'static str = "Tag";

        fn key(&self) -> RecordKey {
            RecordKey::new(&self.site, &self.code)
        }

        fn last_modified(&self) -> Option<DateTime<Utc>> {
            self.at
        }

        fn set_last_modified(&mut self, at: Option<DateTime<Utc>>) {
            self.at = at;
        }

        fn apply_business_fields(mut self, incoming: &Self) -> Self {
            if let Some(ref label) = incoming.label {
                self.label = Some(label.clone());
            }
            if let Some(ref colour) = incoming.colour {
                self.colour = Some(colour.clone());
            }
            self
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn repo(store: &MemoryStore<Tag>) -> Repository<Tag> {
        Repository::new(Arc::new(store.clone())).with_clock(fixed_now)
    }

    #[tokio::test]
    async fn test_save_inserts_then_merges() {
        let store = MemoryStore::new();
        let repo = repo(&store);

        assert!(repo.save(tag("S1", "T1", Some("red tag"), Some("red"))).await.unwrap());
        assert!(repo.save(tag("S1", "T1", Some("crimson tag"), None)).await.unwrap());

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].label.as_deref(), Some("crimson tag"));
        assert_eq!(all[0].colour.as_deref(), Some("red"));
        assert_eq!(all[0].at, Some(fixed_now()));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = repo(&store)
            .update(tag("S1", "T1", Some("x"), None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_trusted_timestamps_keep_caller_value() {
        let store = MemoryStore::new();
        let repo = repo(&store).with_timestamps(TimestampPolicy::Trusted);
        let supplied = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let mut first = tag("S1", "T1", Some("a"), None);
        first.at = Some(supplied);
        repo.add(first).await.unwrap();

        // An absent incoming timestamp keeps the stored one
        repo.update(tag("S1", "T1", Some("b"), None)).await.unwrap();
        let stored = repo.get_by_code("T1").await.unwrap().unwrap();
        assert_eq!(stored.at, Some(supplied));
        assert_eq!(stored.label.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_delete_uses_key_not_contents() {
        let store = MemoryStore::new();
        let repo = repo(&store);
        repo.add(tag("S1", "T1", Some("a"), Some("blue"))).await.unwrap();

        let stale = tag("S1", "T1", None, None);
        assert_eq!(repo.delete(&stale).await.unwrap(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_repository_debug_names_entity() {
        let store = MemoryStore::<Tag>::new();
        let rendered = format!("{:?}", repo(&store));
        assert!(rendered.contains("Tag"));
    }
}
