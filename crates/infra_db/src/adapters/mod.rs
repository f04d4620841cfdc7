//! Store Adapters
//!
//! This module provides `Store<R>` implementations backed by PostgreSQL,
//! connecting the repository layer in `core_kernel` to the table
//! repositories.
//!
//! # Architecture
//!
//! Each adapter:
//! - Implements `Store<R>` for its record type
//! - Translates between domain records and row types
//! - Converts `DatabaseError` into `PortError::StoreFailure`
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresEmployeeStore;
//! use core_kernel::{KeyFilter, Store};
//!
//! let store = PostgresEmployeeStore::new(pool);
//! let matches = store.find(&KeyFilter::by_code("E1")).await?;
//! ```

pub mod company;
pub mod employee;

pub use company::PostgresCompanyStore;
pub use employee::PostgresEmployeeStore;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Runs `SELECT 1` against the pool and reports the outcome
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        },
        Err(e) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(format!("Database error: {}", e)),
            checked_at: Utc::now(),
        },
    }
}
