//! Company domain service
//!
//! Thin orchestration above the company repository: identity validation
//! before any store access, and a visible NotFound where the operation needs
//! the company to exist.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{CompanyCode, PortError, Record, Repository, Store, TimestampPolicy};

use crate::company::Company;

/// Repository of companies keyed by `(site_id, company_code)`
pub type CompanyRepository = Repository<Company>;

/// Service for managing companies
#[derive(Debug, Clone)]
pub struct CompanyService {
    repository: CompanyRepository,
}

impl CompanyService {
    /// Creates a service over an existing repository
    pub fn new(repository: CompanyRepository) -> Self {
        Self { repository }
    }

    /// Creates a service directly from a store handle
    ///
    /// # Arguments
    ///
    /// * `store` - Any company store backend
    /// * `timestamps` - How `last_modified` is treated on writes
    pub fn from_store(store: Arc<dyn Store<Company>>, timestamps: TimestampPolicy) -> Self {
        Self::new(Repository::new(store).with_timestamps(timestamps))
    }

    /// Returns the underlying repository
    pub fn repository(&self) -> &CompanyRepository {
        &self.repository
    }

    /// Lists every company
    pub async fn get_all_companies(&self) -> Result<Vec<Company>, PortError> {
        self.repository.get_all().await
    }

    /// Looks a company up by code; absence is not an error
    pub async fn get_company_by_code(&self, code: &CompanyCode) -> Result<Option<Company>, PortError> {
        self.repository.get_by_code(code.as_str()).await
    }

    /// Looks a company up by code, failing with NotFound when absent
    pub async fn require_company(&self, code: &CompanyCode) -> Result<Company, PortError> {
        self.get_company_by_code(code)
            .await?
            .ok_or_else(|| PortError::not_found(Company::ENTITY, code))
    }

    /// Adds a new company without checking for an existing one
    #[instrument(skip(self, company), fields(company_code = %company.company_code))]
    pub async fn add_company(&self, company: Company) -> Result<(), PortError> {
        company.validate_identity()?;
        self.repository.add(company).await?;
        info!("Company added");
        Ok(())
    }

    /// Saves a company, merging onto the stored one when its key exists
    #[instrument(skip(self, company), fields(company_code = %company.company_code))]
    pub async fn save_company(&self, company: Company) -> Result<bool, PortError> {
        company.validate_identity()?;
        self.repository.save(company).await
    }

    /// Updates an existing company
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no company has the same site and code
    #[instrument(skip(self, company), fields(company_code = %company.company_code))]
    pub async fn update_company(&self, company: Company) -> Result<(), PortError> {
        company.validate_identity()?;
        self.repository.update(company).await?;
        info!("Company updated");
        Ok(())
    }

    /// Deletes the company with the given code
    ///
    /// The company is fetched first so deleting an unknown code is reported
    /// as NotFound rather than succeeding silently.
    #[instrument(skip(self), fields(company_code = %code))]
    pub async fn delete_company(&self, code: &CompanyCode) -> Result<(), PortError> {
        if code.is_blank() {
            return Err(PortError::invalid_field("company code is required", "company_code"));
        }

        let company = match self.get_company_by_code(code).await? {
            Some(company) => company,
            None => {
                warn!("Company not found");
                return Err(PortError::not_found(Company::ENTITY, code));
            }
        };

        self.repository.delete(&company).await?;
        info!("Company deleted");
        Ok(())
    }
}
