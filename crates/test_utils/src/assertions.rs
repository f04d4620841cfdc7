//! Custom Test Assertions
//!
//! Provides assertion helpers for port errors and stored records that give
//! more meaningful failure messages than a bare `assert!`.

use chrono::{DateTime, Utc};
use std::fmt::Debug;

use core_kernel::{PortError, Record, RecordKey};

/// Asserts that the result is a `PortError::NotFound`
///
/// # Panics
///
/// Panics if the result is `Ok` or a different error
pub fn assert_not_found<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(ref e) if e.is_not_found() => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// Asserts that the result is a `PortError::InvalidArgument`
pub fn assert_invalid_argument<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(ref e) if e.is_invalid_argument() => {}
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

/// Asserts that the result is a `PortError::StoreFailure`
pub fn assert_store_failure<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(ref e) if e.is_store_failure() => {}
        other => panic!("Expected StoreFailure, got {:?}", other),
    }
}

/// Asserts that exactly one record carries the key and returns it
///
/// # Panics
///
/// Panics if the key is absent or duplicated
pub fn assert_single_with_key<'a, R: Record>(records: &'a [R], key: &RecordKey) -> &'a R {
    let matching: Vec<&R> = records.iter().filter(|r| &r.key() == key).collect();
    assert_eq!(
        matching.len(),
        1,
        "Expected exactly one {} with key {}, found {}",
        R::ENTITY,
        key,
        matching.len()
    );
    matching[0]
}

/// Asserts that the record was stamped at the expected instant
pub fn assert_stamped<R: Record>(record: &R, expected: DateTime<Utc>) {
    assert_eq!(
        record.last_modified(),
        Some(expected),
        "{} {} has last_modified={:?}, expected {}",
        R::ENTITY,
        record.key(),
        record.last_modified(),
        expected
    );
}
