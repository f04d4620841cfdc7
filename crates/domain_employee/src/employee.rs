//! Employee record and merge rule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{EmployeeCode, Record, RecordKey, SiteId};

/// An employee in the directory, identified by `(site_id, employee_code)`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub site_id: SiteId,
    pub employee_code: EmployeeCode,
    pub employee_name: Option<String>,
    pub occupation: Option<String>,
    pub employee_status: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Employee {
    /// Creates an employee with only its identity set
    pub fn new(site_id: impl Into<SiteId>, employee_code: impl Into<EmployeeCode>) -> Self {
        Self {
            site_id: site_id.into(),
            employee_code: employee_code.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.employee_status = Some(status.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email_address = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the composite key of this employee
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.site_id.as_str(), self.employee_code.as_str())
    }
}

/// Copies every business field `incoming` carries onto `existing`
///
/// Identity and `last_modified` stay with `existing`; `None` on `incoming`
/// keeps the stored value.
pub fn apply_business_fields(mut existing: Employee, incoming: &Employee) -> Employee {
    let fields = [
        (&mut existing.employee_name, &incoming.employee_name),
        (&mut existing.occupation, &incoming.occupation),
        (&mut existing.employee_status, &incoming.employee_status),
        (&mut existing.email_address, &incoming.email_address),
        (&mut existing.phone, &incoming.phone),
    ];
    for (current, carried) in fields {
        if carried.is_some() {
            current.clone_from(carried);
        }
    }
    existing
}

impl Record for Employee {
    const ENTITY: &'static str = "Employee";

    fn key(&self) -> RecordKey {
        Employee::key(self)
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    fn set_last_modified(&mut self, at: Option<DateTime<Utc>>) {
        self.last_modified = at;
    }

    fn apply_business_fields(self, incoming: &Self) -> Self {
        apply_business_fields(self, incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_copies_status_and_contact() {
        let stored = Employee::new("S1", "E1")
            .with_name("Ana")
            .with_status("Active")
            .with_email("ana@example.com");
        let incoming = Employee::new("S1", "E1")
            .with_status("On Leave")
            .with_phone("021 555 0100");

        let merged = apply_business_fields(stored, &incoming);
        assert_eq!(merged.employee_name.as_deref(), Some("Ana"));
        assert_eq!(merged.employee_status.as_deref(), Some("On Leave"));
        assert_eq!(merged.email_address.as_deref(), Some("ana@example.com"));
        assert_eq!(merged.phone.as_deref(), Some("021 555 0100"));
    }

    #[test]
    fn test_merge_keeps_identity_and_timestamp() {
        let mut stored = Employee::new("S1", "E1");
        stored.last_modified = Some(Utc::now());
        let before = stored.last_modified;

        let mut incoming = Employee::new("S2", "E2").with_name("Other");
        incoming.last_modified = None;

        let merged = apply_business_fields(stored, &incoming);
        assert_eq!(merged.key(), RecordKey::new("S1", "E1"));
        assert_eq!(merged.last_modified, before);
    }
}
