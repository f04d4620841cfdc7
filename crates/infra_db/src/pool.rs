//! PostgreSQL pool settings and construction

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Pool settings for the PostgreSQL backend
///
/// ```rust
/// use infra_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("postgres://localhost/directory")
///     .max_connections(4)
///     .connect_timeout(Duration::from_secs(5));
/// assert_eq!(config.min_connections, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// How long an acquire waits before failing with `PoolExhausted`
    pub connect_timeout: Duration,
    /// Idle connections above `min_connections` are closed after this
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    /// Two tables and short queries: a small lazy pool is plenty
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 0,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(5 * 60),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min.min(self.max_connections);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
    }
}

/// Opens the pool and proves the database answers
///
/// # Errors
///
/// `DatabaseError::ConnectionFailed` when no connection can be established
/// within `connect_timeout`
pub async fn create_pool(config: DatabaseConfig) -> Result<PgPool, DatabaseError> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        connect_timeout_ms = config.connect_timeout.as_millis() as u64,
        "Opening directory database pool"
    );

    let pool = config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!(size = pool.size(), "Directory database pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_connections_never_exceeds_max() {
        let config = DatabaseConfig::new("postgres://test")
            .max_connections(3)
            .min_connections(8);

        assert_eq!(config.min_connections, 3);
    }

    #[test]
    fn test_defaults_are_a_small_lazy_pool() {
        let config = DatabaseConfig::new("postgres://localhost/directory");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 0);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_unreachable_database_is_connection_failure() {
        let config = DatabaseConfig::new("postgres://nobody@127.0.0.1:1/none")
            .connect_timeout(Duration::from_millis(200));

        let err = create_pool(config).await.unwrap_err();
        assert!(err.is_connection_error());
    }
}
