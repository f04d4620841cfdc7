//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};

use domain_company::Company;
use domain_employee::Employee;

use crate::fixtures::{CompanyFixtures, EmployeeFixtures};

/// Builder for constructing test companies
///
/// Starts from the fully populated Acme fixture.
pub struct TestCompanyBuilder {
    company: Company,
}

impl Default for TestCompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCompanyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            company: CompanyFixtures::acme(),
        }
    }

    /// Creates a builder with only the identity set
    pub fn bare(site_id: &str, company_code: &str) -> Self {
        Self {
            company: Company::new(site_id, company_code),
        }
    }

    /// Sets the company name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.company.company_name = Some(name.into());
        self
    }

    /// Sets the country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.company.country = Some(country.into());
        self
    }

    /// Sets the postal code
    pub fn with_postal_code(mut self, code: impl Into<String>) -> Self {
        self.company.postal_zip_code = Some(code.into());
        self
    }

    /// Sets the last modification timestamp
    pub fn modified_at(mut self, at: DateTime<Utc>) -> Self {
        self.company.last_modified = Some(at);
        self
    }

    /// Builds the company
    pub fn build(self) -> Company {
        self.company
    }
}

/// Builder for constructing test employees
///
/// Starts from the fully populated Ana fixture.
pub struct TestEmployeeBuilder {
    employee: Employee,
}

impl Default for TestEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEmployeeBuilder {
    pub fn new() -> Self {
        Self {
            employee: EmployeeFixtures::ana(),
        }
    }

    pub fn bare(site_id: &str, employee_code: &str) -> Self {
        Self {
            employee: Employee::new(site_id, employee_code),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.employee.employee_name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.employee.employee_status = Some(status.into());
        self
    }

    pub fn modified_at(mut self, at: DateTime<Utc>) -> Self {
        self.employee.last_modified = Some(at);
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}
