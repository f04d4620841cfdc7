//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! directory test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built companies, employees and wired services
//! - `RecordingStore`: the store spy from `core_kernel`, re-exported
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL container management
//! - `assertions`: Assertion helpers for port errors and stored records
//! - `generators`: Property-based strategies and fake data

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;

pub use core_kernel::{CallCounts, RecordingStore};
