//! Employee DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_employee::Employee;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[validate(length(min = 1, max = 64, message = "site id is required"))]
    pub site_id: String,
    #[validate(length(min = 1, max = 64, message = "employee code is required"))]
    pub employee_code: String,
    pub employee_name: Option<String>,
    pub occupation: Option<String>,
    pub employee_status: Option<String>,
    #[validate(email)]
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Employee {
            site_id: dto.site_id.into(),
            employee_code: dto.employee_code.into(),
            employee_name: dto.employee_name,
            occupation: dto.occupation,
            employee_status: dto.employee_status,
            email_address: dto.email_address,
            phone: dto.phone,
            last_modified: dto.last_modified,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        EmployeeDto {
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
