//! Employee Domain
//!
//! Employee records, their merge rule and the employee service. Storage is
//! reached through `core_kernel::Repository<Employee>`, so the service runs
//! unchanged over the memory, file or PostgreSQL stores.

pub mod employee;
pub mod service;

pub use employee::{Employee, apply_business_fields};
pub use service::{EmployeeService, EmployeeRepository};
