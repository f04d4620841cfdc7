//! Infrastructure Database Layer
//!
//! This crate provides the persistent store backends for the company and
//! employee directory:
//!
//! - PostgreSQL stores built on SQLx, one table per entity
//! - A JSON file store for single-process local deployments
//!
//! # Architecture
//!
//! Table repositories own the SQL and speak in row types; store adapters
//! implement `core_kernel::Store<R>` over them so the domain never sees a
//! database type. Every backend failure reaches the domain as
//! `PortError::StoreFailure`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresCompanyStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/directory")).await?;
//! let store = PostgresCompanyStore::new(pool);
//! ```
//!
//! # Testing
//!
//! A plain `cargo test` covers the error mapping, row conversions, pool
//! settings and the JSON file store. The SQL itself (nullable key filters,
//! the primary key turning a duplicate insert into `StoreFailure`) only runs
//! against a real PostgreSQL in `tests/postgres_store_tests.rs`, which starts
//! a container and is `#[ignore]`d by default:
//!
//! ```text
//! cargo test -p infra_db -- --ignored
//! ```

pub mod pool;
pub mod error;
pub mod file;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use file::JsonFileStore;
pub use adapters::{PostgresCompanyStore, PostgresEmployeeStore};
