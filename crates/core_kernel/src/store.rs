//! Generic Store Port
//!
//! The store is the minimal data-access abstraction every backend implements:
//! key-filtered find, find-all, insert, update and delete over one record
//! type. Repositories depend on `Arc<dyn Store<R>>` and never on a concrete
//! backend, so an in-memory store can stand in for PostgreSQL in tests.
//!
//! # Filters
//!
//! Lookups use a typed [`KeyFilter`] rather than arbitrary closures. Every
//! query the directory needs is an equality check on the site, the business
//! code, or both; a filter with both halves unset matches every record.
//!
//! # Usage
//!
//! ```rust,ignore
//! let store: Arc<dyn Store<Company>> = Arc::new(MemoryStore::new());
//! let matches = store.find(&KeyFilter::by_code("C1")).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

use crate::identifiers::RecordKey;
use crate::ports::{DomainPort, HealthCheckable, PortError};

/// A record that can be kept in a [`Store`]
///
/// Implemented by each entity type. The store only needs the composite key;
/// the repository additionally needs the merge rule and the timestamp.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    /// Entity name used in errors and log fields
    const ENTITY: &'static str;

    /// Returns the composite identity of this record
    fn key(&self) -> RecordKey;

    /// Returns the last modification timestamp, if known
    fn last_modified(&self) -> Option<DateTime<Utc>>;

    /// Replaces the last modification timestamp
    fn set_last_modified(&mut self, at: Option<DateTime<Utc>>);

    /// Copies the business fields carried by `incoming` onto `self`
    ///
    /// Implementations must leave the identity fields untouched and keep any
    /// field that `incoming` does not carry. `last_modified` is handled by the
    /// repository's timestamp policy, not here.
    fn apply_business_fields(self, incoming: &Self) -> Self;

    /// Rejects records that have no usable identity
    fn validate_identity(&self) -> Result<(), PortError> {
        let key = self.key();
        if key.site_id.trim().is_empty() {
            return Err(PortError::invalid_field(
                format!("{} site id is required", Self::ENTITY),
                "site_id",
            ));
        }
        if key.code.trim().is_empty() {
            return Err(PortError::invalid_field(
                format!("{} code is required", Self::ENTITY),
                "code",
            ));
        }
        Ok(())
    }
}

/// Equality filter over the composite key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFilter {
    /// Match records on this site
    pub site_id: Option<String>,
    /// Match records with this business code
    pub code: Option<String>,
}

impl KeyFilter {
    /// Creates a filter matching every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter on the business code alone, across all sites
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Creates a filter on the full composite key
    pub fn by_key(key: &RecordKey) -> Self {
        Self {
            site_id: Some(key.site_id.clone()),
            code: Some(key.code.clone()),
        }
    }

    /// Narrows the filter to a site
    pub fn on_site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    /// Returns true if the key satisfies every set half of the filter
    pub fn matches(&self, key: &RecordKey) -> bool {
        if let Some(ref site_id) = self.site_id {
            if &key.site_id != site_id {
                return false;
            }
        }
        if let Some(ref code) = self.code {
            if &key.code != code {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for KeyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.site_id.as_deref().unwrap_or("*"),
            self.code.as_deref().unwrap_or("*")
        )
    }
}

/// The store port, parameterised over the record type
///
/// No operation checks key uniqueness; that is the caller's job. All methods
/// are async because every backend may suspend on I/O.
#[async_trait]
pub trait Store<R: Record>: DomainPort + HealthCheckable {
    /// Returns every record, in no particular order
    async fn find_all(&self) -> Result<Vec<R>, PortError>;

    /// Returns every record matching the filter
    async fn find(&self, filter: &KeyFilter) -> Result<Vec<R>, PortError>;

    /// Adds a record
    ///
    /// # Returns
    ///
    /// True if the record was written
    ///
    /// # Errors
    ///
    /// `PortError::InvalidArgument` if the record has no identity
    async fn insert(&self, record: R) -> Result<bool, PortError>;

    /// Overwrites the stored record that has the same composite key
    ///
    /// # Returns
    ///
    /// True if a stored record was overwritten, false if none had the key
    async fn update(&self, record: R) -> Result<bool, PortError>;

    /// Removes every record matching the filter
    ///
    /// # Returns
    ///
    /// The number of records removed
    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_code_ignores_site() {
        let filter = KeyFilter::by_code("C1");
        assert!(filter.matches(&RecordKey::new("S1", "C1")));
        assert!(filter.matches(&RecordKey::new("S2", "C1")));
        assert!(!filter.matches(&RecordKey::new("S1", "C2")));
    }

    #[test]
    fn test_filter_by_key_needs_both_halves() {
        let filter = KeyFilter::by_key(&RecordKey::new("S1", "C1"));
        assert!(filter.matches(&RecordKey::new("S1", "C1")));
        assert!(!filter.matches(&RecordKey::new("S2", "C1")));
        assert!(!filter.matches(&RecordKey::new("S1", "C2")));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(KeyFilter::all().matches(&RecordKey::new("any", "thing")));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(KeyFilter::by_code("C1").to_string(), "*/C1");
        assert_eq!(KeyFilter::by_code("C1").on_site("S1").to_string(), "S1/C1");
    }
}
