//! Company handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};
use validator::Validate;

use core_kernel::CompanyCode;
use domain_company::Company;

use crate::dto::company::CompanyDto;
use crate::dto::SaveResponse;
use crate::{error::ApiError, AppState};

/// Lists all companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyDto>>, ApiError> {
    info!("Fetching all companies");
    let companies = state.companies.get_all_companies().await?;
    Ok(Json(companies.into_iter().map(CompanyDto::from).collect()))
}

/// Gets a company by code
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_code): Path<String>,
) -> Result<Json<CompanyDto>, ApiError> {
    let code = CompanyCode::new(company_code);
    match state.companies.get_company_by_code(&code).await? {
        Some(company) => Ok(Json(company.into())),
        None => {
            warn!(company_code = %code, "Company not found");
            Err(ApiError::NotFound(format!("Company {} not found", code)))
        }
    }
}

/// Adds a company without checking for an existing one
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;
    info!(company_code = %dto.company_code, "Adding company");

    let location = format!("/api/company/{}", dto.company_code);
    state.companies.add_company(Company::from(dto.clone())).await?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Saves a company, merging onto the stored one when its key exists
pub async fn save_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyDto>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let saved = state.companies.save_company(dto.into()).await?;
    Ok(Json(SaveResponse { saved }))
}

/// Updates an existing company
pub async fn update_company(
    State(state): State<AppState>,
    Path(company_code): Path<String>,
    payload: Result<Json<CompanyDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = payload?;
    if dto.company_code != company_code {
        warn!(%company_code, body_code = %dto.company_code, "Company code in path does not match body");
        return Err(ApiError::BadRequest("Company code mismatch.".to_string()));
    }
    dto.validate()?;

    state.companies.update_company(dto.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a company by code
pub async fn delete_company(
    State(state): State<AppState>,
    Path(company_code): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!(%company_code, "Deleting company");
    state
        .companies
        .delete_company(&CompanyCode::new(company_code))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
