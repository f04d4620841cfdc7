//! API configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use core_kernel::TimestampPolicy;
use infra_db::DatabaseConfig;

/// Which store backend the server wires the services to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Records live in process memory and vanish on restart
    #[default]
    Memory,
    /// One JSON file per entity under `data_dir`
    File,
    /// PostgreSQL at `database_url`
    Postgres,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, overridden by `RUST_LOG`
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Store backend
    pub store_backend: StoreBackend,
    /// Directory for the JSON file backend
    pub data_dir: PathBuf,
    /// Database URL for the PostgreSQL backend
    pub database_url: String,
    /// Pool ceiling for the PostgreSQL backend
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_connect_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,
    /// How `last_modified` is treated on writes
    pub timestamp_policy: TimestampPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            store_backend: StoreBackend::Memory,
            data_dir: PathBuf::from("data"),
            database_url: "postgres://localhost/directory".to_string(),
            db_max_connections: 5,
            db_min_connections: 0,
            db_connect_timeout_secs: 10,
            db_idle_timeout_secs: 300,
            timestamp_policy: TimestampPolicy::ServerStamped,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `APP_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("APP"))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for the PostgreSQL backend
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.as_str())
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.db_idle_timeout_secs))
    }

    /// Returns the JSON file path for an entity under `data_dir`
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}
