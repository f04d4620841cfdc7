//! Company record and merge rule
//!
//! A company is identified by the pair `(site_id, company_code)`. Every other
//! field is an optional business attribute: `None` means "not carried", which
//! matters when a partial record is merged onto a stored one.
//!
//! # Examples
//!
//! ```rust
//! use domain_company::Company;
//!
//! let stored = Company::new("S1", "C1").with_name("Acme").with_country("NZ");
//! let incoming = Company::new("S1", "C1").with_name("Acme Corp");
//!
//! let merged = domain_company::apply_business_fields(stored, &incoming);
//! assert_eq!(merged.company_name.as_deref(), Some("Acme Corp"));
//! assert_eq!(merged.country.as_deref(), Some("NZ"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CompanyCode, Record, RecordKey, SiteId};

/// A company in the directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    /// Site the company belongs to (identity)
    pub site_id: SiteId,
    /// Business code, unique within a site (identity)
    pub company_code: CompanyCode,
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub country: Option<String>,
    pub equipment_company_code: Option<String>,
    pub fax_number: Option<String>,
    pub phone_number: Option<String>,
    pub postal_zip_code: Option<String>,
    /// When the record was last written
    pub last_modified: Option<DateTime<Utc>>,
}

impl Company {
    /// Creates a company with only its identity set
    pub fn new(site_id: impl Into<SiteId>, company_code: impl Into<CompanyCode>) -> Self {
        Self {
            site_id: site_id.into(),
            company_code: company_code.into(),
            ..Default::default()
        }
    }

    /// Sets the company name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Sets the three address lines
    pub fn with_address(
        mut self,
        line1: impl Into<String>,
        line2: Option<String>,
        line3: Option<String>,
    ) -> Self {
        self.address_line1 = Some(line1.into());
        self.address_line2 = line2;
        self.address_line3 = line3;
        self
    }

    /// Sets the country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    /// Returns the composite key of this company
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.site_id.as_str(), self.company_code.as_str())
    }
}

/// Copies every business field `incoming` carries onto `existing`
///
/// The identity of `existing` is kept; fields that are `None` on `incoming`
/// keep their stored value. `last_modified` is left to the repository.
pub fn apply_business_fields(existing: Company, incoming: &Company) -> Company {
    fn take(current: Option<String>, incoming: &Option<String>) -> Option<String> {
        incoming.clone().or(current)
    }

    Company {
        company_name: take(existing.company_name, &incoming.company_name),
        address_line1: take(existing.address_line1, &incoming.address_line1),
        address_line2: take(existing.address_line2, &incoming.address_line2),
        address_line3: take(existing.address_line3, &incoming.address_line3),
        country: take(existing.country, &incoming.country),
        equipment_company_code: take(existing.equipment_company_code, &incoming.equipment_company_code),
        fax_number: take(existing.fax_number, &incoming.fax_number),
        phone_number: take(existing.phone_number, &incoming.phone_number),
        postal_zip_code: take(existing.postal_zip_code, &incoming.postal_zip_code),
        site_id: existing.site_id,
        company_code: existing.company_code,
        last_modified: existing.last_modified,
    }
}

impl Record for Company {
    const ENTITY: &'static str = "Company";

    fn key(&self) -> RecordKey {
        Company::key(self)
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
