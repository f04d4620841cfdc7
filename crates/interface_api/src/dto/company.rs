//! Company DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_company::Company;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    #[validate(length(min = 1, max = 64, message = "site id is required"))]
    pub site_id: String,
    #[validate(length(min = 1, max = 64, message = "company code is required"))]
    pub company_code: String,
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub country: Option<String>,
    pub equipment_company_code: Option<String>,
    pub fax_number: Option<String>,
    pub phone_number: Option<String>,
    pub postal_zip_code: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Company {
            site_id: dto.site_id.into(),
            company_code: dto.company_code.into(),
            company_name: dto.company_name,
            address_line1: dto.address_line1,
            address_line2: dto.address_line2,
            address_line3: dto.address_line3,
            country: dto.country,
            equipment_company_code: dto.equipment_company_code,
            fax_number: dto.fax_number,
            phone_number: dto.phone_number,
            postal_zip_code: dto.postal_zip_code,
            last_modified: dto.last_modified,
        }
    }
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        CompanyDto {
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
