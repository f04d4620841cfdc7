//! Core Kernel - Foundational types for the company and employee directory
//!
//! This crate provides the building blocks used by every domain crate:
//! - Strongly-typed business codes and the composite record key
//! - The generic store port with its key filter
//! - The composite-key repository implementing save-or-update
//! - A unified port error and health checking
//! - An in-memory store backend

pub mod identifiers;
pub mod ports;
pub mod store;
pub mod memory;
pub mod repository;
pub mod temporal;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use identifiers::{SiteId, CompanyCode, EmployeeCode, RecordKey};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use store::{Store, Record, KeyFilter};
pub use memory::MemoryStore;
pub use repository::{Repository, Clock};
pub use temporal::{TimestampPolicy, UnknownTimestampPolicy};
#[cfg(any(test, feature = "mock"))]
pub use mock::{RecordingStore, CallCounts};
