//! Table repositories
//!
//! Each repository owns the SQL for one table and speaks in row types and
//! `DatabaseError`. The store adapters translate rows into domain records.
//!
//! # Architecture
//!
//! - Runtime-checked queries via `sqlx::query_as`, so builds need no database
//! - Key filters bound as nullable text parameters
//! - Writes report `rows_affected` and leave interpretation to the adapter

pub mod company;
pub mod employee;

pub use company::{CompanyRow, CompanyTable};
pub use employee::{EmployeeRow, EmployeeTable};
