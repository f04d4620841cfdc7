//! Company Domain
//!
//! This crate owns the company record, its merge rule and the company
//! service. Persistence goes through the generic `Repository` from
//! `core_kernel`, so any `Store<Company>` backend can be plugged in.
//!
//! # Identity
//!
//! A company is identified by `(site_id, company_code)`. At most one stored
//! record exists per pair when callers go through `save` or `update`; `add`
//! does not check, matching the store contract.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use core_kernel::{MemoryStore, TimestampPolicy};
//! use domain_company::{Company, CompanyService};
//!
//! # tokio_test_block(async {
//! let service = CompanyService::from_store(
//!     Arc::new(MemoryStore::<Company>::new()),
//!     TimestampPolicy::ServerStamped,
//! );
//! service.save_company(Company::new("S1", "C1").with_name("Acme")).await.unwrap();
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f);
//! # }
//! ```

pub mod company;
pub mod service;

pub use company::{Company, apply_business_fields};
pub use service::{CompanyService, CompanyRepository};
