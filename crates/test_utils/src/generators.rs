//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random records that keep the
//! identity invariants, plus `fake`-backed helpers for realistic looking
//! sample data.

use fake::faker::address::en::{CountryCode, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use proptest::prelude::*;

use domain_company::Company;
use domain_employee::Employee;

/// Strategy for generating non-blank site ids
pub fn site_strategy() -> impl Strategy<Value = String> {
    "S[0-9]{1,3}"
}

/// Strategy for generating non-blank business codes
pub fn code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}[0-9]{1,4}"
}

/// Strategy for an optional business field
pub fn optional_field_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 .-]{1,24}")
}

/// Strategy for companies with a fixed key and random business fields
pub fn company_on_key_strategy(
    site_id: String,
    company_code: String,
) -> impl Strategy<Value = Company> {
    (
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
    )
        .prop_map(move |(name, line1, line2, country, phone, postal)| {
            let mut company = Company::new(site_id.as_str(), company_code.as_str());
            company.company_name = name;
            company.address_line1 = line1;
            company.address_line2 = line2;
            company.country = country;
            company.phone_number = phone;
            company.postal_zip_code = postal;
            company
        })
}

/// Strategy for companies with random keys
pub fn company_strategy() -> impl Strategy<Value = Company> {
    (site_strategy(), code_strategy())
        .prop_flat_map(|(site, code)| company_on_key_strategy(site, code))
}

/// Strategy for employees with a fixed key and random business fields
pub fn employee_on_key_strategy(
    site_id: String,
    employee_code: String,
) -> impl Strategy<Value = Employee> {
    (
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
        optional_field_strategy(),
    )
        .prop_map(move |(name, occupation, status, email, phone)| Employee {
            employee_name: name,
            occupation,
            employee_status: status,
            email_address: email,
            phone,
            ..Employee::new(site_id.as_str(), employee_code.as_str())
        })
}

/// Strategy for employees with random keys
pub fn employee_strategy() -> impl Strategy<Value = Employee> {
    (site_strategy(), code_strategy())
        .prop_flat_map(|(site, code)| employee_on_key_strategy(site, code))
}

/// Builds a company with every business field filled from `fake`
pub fn fake_company(site_id: &str, company_code: &str) -> Company {
    let mut company = Company::new(site_id, company_code)
        .with_name(CompanyName().fake::<String>())
        .with_address(StreetName().fake::<String>(), None, None)
        .with_country(CountryCode().fake::<String>())
        .with_phone(PhoneNumber().fake::<String>());
    company.postal_zip_code = Some(ZipCode().fake());
    company.fax_number = Some(PhoneNumber().fake());
    company
}

/// Builds an employee with every business field filled from `fake`
pub fn fake_employee(site_id: &str, employee_code: &str) -> Employee {
    Employee::new(site_id, employee_code)
        .with_name(Name().fake::<String>())
        .with_occupation(Title().fake::<String>())
        .with_status("Active")
        .with_email(SafeEmail().fake::<String>())
        .with_phone(PhoneNumber().fake::<String>())
}
