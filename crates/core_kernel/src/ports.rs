//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types shared by every port in the
//! directory: the unified error type, the port marker trait and health
//! checking.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Services                         │
//! │              (CompanyService, EmployeeService)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Repository<R: Record>                      │
//! │           upsert, composite-key lookup and delete            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Store<R> port trait                       │
//! └─────────────────────────────────────────────────────────────┘
//!          ▲                   ▲                      ▲
//!   ┌──────┴──────┐    ┌───────┴───────┐     ┌────────┴────────┐
//!   │ MemoryStore │    │ JsonFileStore │     │ PostgreSQL store │
//!   └─────────────┘    └───────────────┘     └─────────────────┘
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// Every layer (store, repository, service) reports failures through this
/// type, so a store failure reaches the caller unchanged.
#[derive(Debug, Error)]
pub enum PortError {
    /// A required argument is missing or has no identity
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        field: Option<String>,
    },

    /// No record matched the composite key
    #[error("Not found: {entity_type} with key {key}")]
    NotFound {
        entity_type: String,
        key: String,
    },

    /// The underlying store could not complete the operation
    #[error("Store failure: {message}")]
    StoreFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, key: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            key: key.to_string(),
        }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PortError::InvalidArgument {
            message: message.into(),
            field: None,
        }
    }

    /// Creates an InvalidArgument error with field information
    pub fn invalid_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::InvalidArgument {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a StoreFailure error without a source
    pub fn store_failure(message: impl Into<String>) -> Self {
        PortError::StoreFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a StoreFailure error wrapping the backend error
    pub fn store_failure_from(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::StoreFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error indicates a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PortError::InvalidArgument { .. })
    }

    /// Returns true if this error came from the store backend
    pub fn is_store_failure(&self) -> bool {
        matches!(self, PortError::StoreFailure { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Builds a healthy result with zero latency
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Returns true unless the adapter reported itself unhealthy
    pub fn is_available(&self) -> bool {
        self.status != AdapterHealth::Unhealthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
