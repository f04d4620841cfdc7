//! Pre-built Test Fixtures
//!
//! Provides ready-to-use companies, employees and services wired over a
//! recording store. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::Arc;

use core_kernel::{MemoryStore, RecordingStore, Repository, TimestampPolicy};
use domain_company::{Company, CompanyService};
use domain_employee::{Employee, EmployeeService};

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 6, 30, 9, 0, 0).unwrap());

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every fixture clock reports (Jun 30, 2024 09:00 UTC)
    pub fn fixed_now() -> DateTime<Utc> {
        *FIXED_NOW
    }

    /// A caller-supplied timestamp well before `fixed_now`
    pub fn supplied() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 1, 8, 0, 0).unwrap()
    }
}

/// Fixture for company test data
pub struct CompanyFixtures;

impl CompanyFixtures {
    /// A fully populated company at S1/C1
    pub fn acme() -> Company {
        let mut company = Company::new("S1", "C1")
            .with_name("Acme")
            .with_address("1 Queen St", Some("Suite 4".to_string()), None)
            .with_country("NZ")
            .with_phone("09-555-0100");
        company.postal_zip_code = Some("1010".to_string());
        company.equipment_company_code = Some("EQ-1".to_string());
        company.fax_number = Some("09-555-0101".to_string());
        company
    }

    /// A second company on the same site
    pub fn beta() -> Company {
        Company::new("S1", "C2").with_name("Beta Ltd").with_country("AU")
    }

    /// A company sharing Acme's code on another site
    pub fn acme_south() -> Company {
        Company::new("S2", "C1").with_name("Acme South")
    }

    /// A partial update for Acme carrying only a new name
    pub fn acme_rename() -> Company {
        Company::new("S1", "C1").with_name("Acme Corp")
    }

    /// A company with no identity at all
    pub fn nameless() -> Company {
        Company::new("", "")
    }
}

/// Fixture for employee test data
pub struct EmployeeFixtures;

impl EmployeeFixtures {
    /// A fully populated employee at S1/E1
    pub fn ana() -> Employee {
        Employee::new("S1", "E1")
            .with_name("Ana Kowalski")
            .with_occupation("Engineer")
            .with_status("Active")
            .with_email("ana@example.com")
            .with_phone("021 555 0100")
    }

    /// A second employee on the same site
    pub fn ben() -> Employee {
        Employee::new("S1", "E2").with_name("Ben Ito").with_status("Active")
    }

    /// A partial update moving Ana to leave
    pub fn ana_on_leave() -> Employee {
        Employee::new("S1", "E1").with_status("On Leave")
    }
}

/// Services wired over recording stores with a fixed clock
pub struct ServiceFixtures;

impl ServiceFixtures {
    /// Builds a company service over `records`, returning the spy store too
    pub fn company_service(
        records: Vec<Company>,
        timestamps: TimestampPolicy,
    ) -> (CompanyService, RecordingStore<Company>) {
        let store = RecordingStore::wrap(MemoryStore::with_records(records));
        let repository = Repository::new(Arc::new(store.clone()))
            .with_timestamps(timestamps)
            .with_clock(TemporalFixtures::fixed_now);
        (CompanyService::new(repository), store)
    }

    /// Builds an employee service over `records`, returning the spy store too
    pub fn employee_service(
        records: Vec<Employee>,
        timestamps: TimestampPolicy,
    ) -> (EmployeeService, RecordingStore<Employee>) {
        let store = RecordingStore::wrap(MemoryStore::with_records(records));
        let repository = Repository::new(Arc::new(store.clone()))
            .with_timestamps(timestamps)
            .with_clock(TemporalFixtures::fixed_now);
        (EmployeeService::new(repository), store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_fixtures_share_code_across_sites() {
        assert_eq!(CompanyFixtures::acme().company_code, CompanyFixtures::acme_south().company_code);
        assert_ne!(CompanyFixtures::acme().site_id, CompanyFixtures::acme_south().site_id);
    }

    #[test]
    fn test_supplied_is_before_fixed_now() {
        assert!(TemporalFixtures::supplied() < TemporalFixtures::fixed_now());
    }

    #[tokio::test]
    async fn test_service_fixture_sees_seeded_records() {
        let (service, store) = ServiceFixtures::employee_service(
            vec![EmployeeFixtures::ana()],
            TimestampPolicy::Trusted,
        );
        assert_eq!(service.get_all_employees().await.unwrap(), vec![EmployeeFixtures::ana()]);
        assert_eq!(store.calls().total(), 1);
    }
}
