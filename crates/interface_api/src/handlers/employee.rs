//! Employee handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::warn;
use validator::Validate;

use core_kernel::EmployeeCode;
use domain_employee::Employee;

use crate::dto::employee::EmployeeDto;
use crate::dto::SaveResponse;
use crate::{error::ApiError, AppState};

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let code = EmployeeCode::new(employee_code);
    state
        .employees
        .get_employee_by_code(&code)
        .await?
        .map(|employee| Json(employee.into()))
        .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", code)))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let location = format!("/api/employee/{}", dto.employee_code);
    state.employees.add_employee(Employee::from(dto.clone())).await?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Saves an employee, merging onto the stored one when its key exists
pub async fn save_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let saved = state.employees.save_employee(dto.into()).await?;
    Ok(Json(SaveResponse { saved }))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = payload?;
    if dto.employee_code != employee_code {
        warn!(%employee_code, body_code = %dto.employee_code, "Employee code in path does not match body");
        return Err(ApiError::BadRequest("Employee code mismatch.".to_string()));
    }
    dto.validate()?;

    state.employees.update_employee(dto.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .employees
        .delete_employee(&EmployeeCode::new(employee_code))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
