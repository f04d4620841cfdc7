//! Request handlers, one module per resource

pub mod company;
pub mod employee;
pub mod health;
