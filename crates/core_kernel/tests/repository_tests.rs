//! Repository behaviour over the in-memory store

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use core_kernel::{
    KeyFilter, MemoryStore, PortError, Record, RecordKey, Repository, Store, TimestampPolicy,
};

/// A minimal record with two business fields
#[derive(Debug, Clone, PartialEq)]
struct Contact {
    site: String,
    code: String,
    email: Option<String>,
    phone: Option<String>,
    last_modified: Option<DateTime<Utc>>,
}

impl Contact {
    fn new(site: &str, code: &str) -> Self {
        Self {
            site: site.to_string(),
            code: code.to_string(),
            email: None,
            phone: None,
            last_modified: None,
        }
    }

    fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }
}

impl Record for Contact {
    const ENTITY: &'static str = "Contact";

    fn key(&self) -> RecordKey {
        RecordKey::new(self.site.as_str(), self.code.as_str())
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    fn set_last_modified(&mut self, at: Option<DateTime<Utc>>) {
        self.last_modified = at;
    }

    fn apply_business_fields(mut self, incoming: &Self) -> Self {
        if incoming.email.is_some() {
            self.email.clone_from(&incoming.email);
        }
        if incoming.phone.is_some() {
            self.phone.clone_from(&incoming.phone);
        }
        self
    }
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn repository(store: &MemoryStore<Contact>, timestamps: TimestampPolicy) -> Repository<Contact> {
    Repository::new(Arc::new(store.clone()))
        .with_timestamps(timestamps)
        .with_clock(noon)
}

// ============================================================================
// Save
// ============================================================================

mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_repeated_saves_keep_one_record_per_key() {
        let store = MemoryStore::new();
        let repo = repository(&store, TimestampPolicy::ServerStamped);

        for email in ["a@x.io", "b@x.io", "c@x.io"] {
            assert!(repo.save(Contact::new("S1", "K1").email(email)).await.unwrap());
        }

        let stored = store.find(&KeyFilter::by_key(&RecordKey::new("S1", "K1"))).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email.as_deref(), Some("c@x.io"));
    }

    #[tokio::test]
    async fn test_save_merge_keeps_fields_not_carried() {
        let store = MemoryStore::with_records(vec![Contact::new("S1", "K1").email("a@x.io").phone("111")]);
        let repo = repository(&store, TimestampPolicy::ServerStamped);

        repo.save(Contact::new("S1", "K1").phone("222")).await.unwrap();

        let stored = repo.find_by_key(&RecordKey::new("S1", "K1")).await.unwrap().unwrap();
        assert_eq!(stored.email.as_deref(), Some("a@x.io"));
        assert_eq!(stored.phone.as_deref(), Some("222"));
        assert_eq!(stored.last_modified, Some(noon()));
    }

    #[tokio::test]
    async fn test_trusted_merge_without_timestamp_keeps_stored_one() {
        let earlier = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut seeded = Contact::new("S1", "K1");
        seeded.last_modified = Some(earlier);
        let store = MemoryStore::with_records(vec![seeded]);
        let repo = repository(&store, TimestampPolicy::Trusted);

        repo.save(Contact::new("S1", "K1").email("a@x.io")).await.unwrap();

        let stored = repo.find_by_key(&RecordKey::new("S1", "K1")).await.unwrap().unwrap();
        assert_eq!(stored.last_modified, Some(earlier));
    }
}

// ============================================================================
// Lookup, add and delete
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_by_code_searches_every_site() {
        let store = MemoryStore::with_records(vec![Contact::new("S9", "K5")]);
        let repo = repository(&store, TimestampPolicy::Trusted);

        let found = repo.get_by_code("K5").await.unwrap().unwrap();
        assert_eq!(found.site, "S9");
        assert!(repo.get_by_code("K6").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_stamps_under_server_policy() {
        let store = MemoryStore::new();
        let repo = repository(&store, TimestampPolicy::ServerStamped);

        repo.add(Contact::new("S1", "K1")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].last_modified, Some(noon()));
    }

    #[tokio::test]
    async fn test_delete_of_unknown_key_removes_nothing() {
        let store = MemoryStore::with_records(vec![Contact::new("S1", "K1")]);
        let repo = repository(&store, TimestampPolicy::Trusted);

        let removed = repo.delete(&Contact::new("S1", "K2")).await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_blank_site_is_invalid_argument() {
        let repo = repository(&MemoryStore::new(), TimestampPolicy::Trusted);

        let err = repo.save(Contact::new(" ", "K1")).await.unwrap_err();
        match err {
            PortError::InvalidArgument { field, .. } => assert_eq!(field.as_deref(), Some("site_id")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
