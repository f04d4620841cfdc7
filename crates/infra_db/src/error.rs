//! Database error types
//!
//! This module defines the error types that can occur during database and
//! file store operations, and their translation into the port error seen by
//! repositories and services.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur during store backend operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check or not-null constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Reading or writing a backing file failed
    #[error("File store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[source] sqlx::Error),
}

impl DatabaseError {
    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_) | DatabaseError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Maps SQLx errors to specific variants using the PostgreSQL error code
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                    Some("23502") | Some("23514") => {
                        DatabaseError::ConstraintViolation(db_err.message().to_string())
                    }
                    _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                }
            }
            _ => DatabaseError::SqlError(error),
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(error: serde_json::Error) -> Self {
        DatabaseError::SerializationError(error.to_string())
    }
}

/// Every backend failure reaches the domain as `PortError::StoreFailure`
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        PortError::store_failure_from(error.to_string(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_connection_error() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(error.is_connection_error());
        assert!(!error.is_constraint_violation());
    }

    #[test]
    fn test_duplicate_key_is_constraint_violation() {
        let error = DatabaseError::DuplicateEntry("companies_pkey".to_string());
        assert!(error.is_constraint_violation());
        assert!(PortError::from(error).is_store_failure());
    }

    #[test]
    fn test_converts_to_store_failure() {
        let port: PortError = DatabaseError::QueryFailed("syntax error".to_string()).into();
        assert!(port.is_store_failure());
        assert!(port.to_string().contains("syntax error"));
    }

    #[test]
    fn test_json_error_is_serialization_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = DatabaseError::from(json_err);
        assert!(matches!(error, DatabaseError::SerializationError(_)));
    }
}
