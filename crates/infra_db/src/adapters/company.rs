//! PostgreSQL Company Store
//!
//! Implements `Store<Company>` on top of [`CompanyTable`], converting between
//! domain records and table rows and translating database errors into
//! `PortError::StoreFailure`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCompanyStore;
//! use core_kernel::Store;
//! use domain_company::Company;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn Store<Company>> = Arc::new(PostgresCompanyStore::new(pool));
//! let companies = store.find_all().await?;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, KeyFilter, PortError, Record, Store,
};
use domain_company::Company;

use crate::adapters::ping;
use crate::repositories::company::{CompanyRow, CompanyTable};

/// PostgreSQL-backed implementation of `Store<Company>`
///
/// The table's primary key is `(site_id, company_code)`, so unlike the
/// in-memory store a duplicate insert fails instead of keeping two rows.
#[derive(Debug, Clone)]
pub struct PostgresCompanyStore {
    table: CompanyTable,
    pool: PgPool,
}

impl PostgresCompanyStore {
    /// Creates a new PostgreSQL company store
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: CompanyTable::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresCompanyStore {}

#[async_trait]
impl HealthCheckable for PostgresCompanyStore {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-company-store").await
    }
}

#[async_trait]
impl Store<Company> for PostgresCompanyStore {
    async fn find_all(&self) -> Result<Vec<Company>, PortError> {
        self.find(&KeyFilter::all()).await
    }

    #[instrument(skip(self), fields(filter = %filter))]
    async fn find(&self, filter: &KeyFilter) -> Result<Vec<Company>, PortError> {
        let rows = self
            .table
            .select(filter.site_id.as_deref(), filter.code.as_deref())
            .await?;
        debug!(count = rows.len(), "Selected companies");

        Ok(rows.into_iter().map(Company::from).collect())
    }

    #[instrument(skip(self, record), fields(key = %record.key()))]
    async fn insert(&self, record: Company) -> Result<bool, PortError> {
        record.validate_identity()?;
        let written = self.table.insert(&CompanyRow::from(record)).await?;
        Ok(written == 1)
    }

    #[instrument(skip(self, record), fields(key = %record.key()))]
    async fn update(&self, record: Company) -> Result<bool, PortError> {
        let changed = self.table.update(&CompanyRow::from(record)).await?;
        Ok(changed > 0)
    }

    #[instrument(skip(self), fields(filter = %filter))]
    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError> {
        let removed = self
            .table
            .delete(filter.site_id.as_deref(), filter.code.as_deref())
            .await?;
        debug!(removed, "Deleted companies");
        Ok(removed)
    }
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            site_id: row.site_id.into(),
            company_code: row.company_code.into(),
            company_name: row.company_name,
            address_line1: row.address_line1,
            address_line2: row.address_line2,
            address_line3: row.address_line3,
            country: row.country,
            equipment_company_code: row.equipment_company_code,
            fax_number: row.fax_number,
            phone_number: row.phone_number,
            postal_zip_code: row.postal_zip_code,
            last_modified: row.last_modified,
        }
    }
}

impl From<Company> for CompanyRow {
    fn from(company: Company) -> Self {
        CompanyRow {
            site_id: company.site_id.into_inner(),
            company_code: company.company_code.into_inner(),
            company_name: company.company_name,
            address_line1: company.address_line1,
            address_line2: company.address_line2,
            address_line3: company.address_line3,
            country: company.country,
            equipment_company_code: company.equipment_company_code,
            fax_number: company.fax_number,
            phone_number: company.phone_number,
            postal_zip_code: company.postal_zip_code,
            last_modified: company.last_modified,
        }
    }
}
