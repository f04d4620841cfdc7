//! Application state and backend wiring

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use core_kernel::{MemoryStore, Store, TimestampPolicy};
use domain_company::{Company, CompanyService};
use domain_employee::{Employee, EmployeeService};
use infra_db::{
    create_pool, DatabaseError, JsonFileStore, PostgresCompanyStore,
    PostgresEmployeeStore,
};

use crate::config::{ApiConfig, StoreBackend};

const COMPANY_FILE: &str = "companies.json";
const EMPLOYEE_FILE: &str = "employees.json";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService>,
    pub employees: Arc<EmployeeService>,
}

/// Errors raised while wiring the configured backend
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to open {backend:?} store: {source}")]
    Backend {
        backend: StoreBackend,
        #[source]
        source: DatabaseError,
    },
}

impl AppState {
    /// Builds state over explicit store handles
    pub fn from_stores(
        companies: Arc<dyn Store<Company>>,
        employees: Arc<dyn Store<Employee>>,
        timestamps: TimestampPolicy,
    ) -> Self {
        Self {
            companies: Arc::new(CompanyService::from_store(companies, timestamps)),
            employees: Arc::new(EmployeeService::from_store(employees, timestamps)),
        }
    }

    /// Builds state over fresh in-memory stores
    pub fn in_memory(timestamps: TimestampPolicy) -> Self {
        Self::from_stores(
            Arc::new(MemoryStore::<Company>::new()),
            Arc::new(MemoryStore::<Employee>::new()),
            timestamps,
        )
    }

    /// Builds state for the backend named in the configuration
    ///
    /// # Errors
    ///
    /// `StartupError::Backend` if the data files cannot be opened or the
    /// database cannot be reached
    pub async fn from_config(config: &ApiConfig) -> Result<Self, StartupError> {
        let backend = config.store_backend;
        let wrap = |source: DatabaseError| StartupError::Backend { backend, source };

        let state = match backend {
            StoreBackend::Memory => Self::in_memory(config.timestamp_policy),
            StoreBackend::File => {
                let companies = JsonFileStore::<Company>::open(config.data_file(COMPANY_FILE))
                    .await
                    .map_err(wrap)?;
                let employees = JsonFileStore::<Employee>::open(config.data_file(EMPLOYEE_FILE))
                    .await
                    .map_err(wrap)?;
                Self::from_stores(Arc::new(companies), Arc::new(employees), config.timestamp_policy)
            }
            StoreBackend::Postgres => {
                let pool = create_pool(config.database_config())
                    .await
                    .map_err(wrap)?;
                Self::from_stores(
                    Arc::new(PostgresCompanyStore::new(pool.clone())),
                    Arc::new(PostgresEmployeeStore::new(pool)),
                    config.timestamp_policy,
                )
            }
        };

        info!(
            backend = ?backend,
            timestamps = ?config.timestamp_policy,
            "Store backend ready"
        );
        Ok(state)
    }
}
