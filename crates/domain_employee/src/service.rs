//! Employee domain service

use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{EmployeeCode, PortError, Record, Repository, Store, TimestampPolicy};

use crate::employee::Employee;

/// Repository of employees keyed by `(site_id, employee_code)`
pub type EmployeeRepository = Repository<Employee>;

/// Service for managing employees
///
/// Validates identity before touching the store and reports a missing
/// employee as `PortError::NotFound` on update and delete. Store failures are
/// returned as they are.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    repository: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repository: EmployeeRepository) -> Self {
        Self { repository }
    }

    /// Creates a service directly from a store handle
    pub fn from_store(store: Arc<dyn Store<Employee>>, timestamps: TimestampPolicy) -> Self {
        Self::new(Repository::new(store).with_timestamps(timestamps))
    }

    pub fn repository(&self) -> &EmployeeRepository {
        &self.repository
    }

    /// Lists every employee
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, PortError> {
        self.repository.get_all().await
    }

    /// Looks an employee up by code; absence is not an error
    pub async fn get_employee_by_code(&self, code: &EmployeeCode) -> Result<Option<Employee>, PortError> {
        self.repository.get_by_code(code.as_str()).await
    }

    /// Looks an employee up by code, failing with NotFound when absent
    pub async fn require_employee(&self, code: &EmployeeCode) -> Result<Employee, PortError> {
        match self.get_employee_by_code(code).await? {
            Some(employee) => Ok(employee),
            None => {
                warn!(employee_code = %code, "Employee not found");
                Err(PortError::not_found(Employee::ENTITY, code))
            }
        }
    }

    #[instrument(skip(self, employee), fields(employee_code = %employee.employee_code))]
    pub async fn add_employee(&self, employee: Employee) -> Result<(), PortError> {
        employee.validate_identity()?;
        self.repository.add(employee).await?;
        info!("Employee added");
        Ok(())
    }

    /// Saves an employee, merging onto the stored one when its key exists
    #[instrument(skip(self, employee), fields(employee_code = %employee.employee_code))]
    pub async fn save_employee(&self, employee: Employee) -> Result<bool, PortError> {
        employee.validate_identity()?;
        self.repository.save(employee).await
    }

    #[instrument(skip(self, employee), fields(employee_code = %employee.employee_code))]
    pub async fn update_employee(&self, employee: Employee) -> Result<(), PortError> {
        employee.validate_identity()?;
        self.repository.update(employee).await?;
        info!("Employee updated");
        Ok(())
    }

    /// Deletes the employee with the given code, NotFound if there is none
    #[instrument(skip(self), fields(employee_code = %code))]
    pub async fn delete_employee(&self, code: &EmployeeCode) -> Result<(), PortError> {
        if code.is_blank() {
            return Err(PortError::invalid_field("employee code is required", "employee_code"));
        }

        let employee = self.require_employee(code).await?;
        self.repository.delete(&employee).await?;
        info!("Employee deleted");
        Ok(())
    }
}
