//! PostgreSQL Employee Store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, KeyFilter, PortError, Record, Store,
};
use domain_employee::Employee;

use crate::adapters::ping;
use crate::repositories::employee::{EmployeeRow, EmployeeTable};

/// PostgreSQL-backed implementation of `Store<Employee>`
#[derive(Debug, Clone)]
pub struct PostgresEmployeeStore {
    table: EmployeeTable,
    pool: PgPool,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            table: EmployeeTable::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresEmployeeStore {}

#[async_trait]
impl HealthCheckable for PostgresEmployeeStore {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-employee-store").await
    }
}

#[async_trait]
impl Store<Employee> for PostgresEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, PortError> {
        self.find(&KeyFilter::all()).await
    }

    #[instrument(skip(self), fields(filter = %filter))]
    async fn find(&self, filter: &KeyFilter) -> Result<Vec<Employee>, PortError> {
        let rows = self
            .table
            .select(filter.site_id.as_deref(), filter.code.as_deref())
            .await?;
        debug!(count = rows.len(), "Selected employees");

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self, record), fields(key = %record.key()))]
    async fn insert(&self, record: Employee) -> Result<bool, PortError> {
        record.validate_identity()?;
        let written = self.table.insert(&EmployeeRow::from(record)).await?;
        Ok(written == 1)
    }

    #[instrument(skip(self, record), fields(key = %record.key()))]
    async fn update(&self, record: Employee) -> Result<bool, PortError> {
        let changed = self.table.update(&EmployeeRow::from(record)).await?;
        Ok(changed > 0)
    }

    #[instrument(skip(self), fields(filter = %filter))]
    async fn delete(&self, filter: &KeyFilter) -> Result<u64, PortError> {
        let removed = self
            .table
            .delete(filter.site_id.as_deref(), filter.code.as_deref())
            .await?;
        debug!(removed, "Deleted employees");
        Ok(removed)
    }
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            site_id: row.site_id.into(),
            employee_code: row.employee_code.into(),
            employee_name: row.employee_name,
            occupation: row.occupation,
            employee_status: row.employee_status,
            email_address: row.email_address,
            phone: row.phone,
            last_modified: row.last_modified,
        }
    }
}

impl From<Employee> for EmployeeRow {
    fn from(employee: Employee) -> Self {
        EmployeeRow {
            site_id: employee.site_id.into_inner(),
            employee_code: employee.employee_code.into_inner(),
            employee_name: employee.employee_name,
            occupation: employee.occupation,
            employee_status: employee.employee_status,
            email_address: employee.email_address,
            phone: employee.phone,
            last_modified: employee.last_modified,
        }
    }
}
