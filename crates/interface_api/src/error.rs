//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Store failure: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request body failed validation".to_string(),
                Some(validation_details(errors)),
            ),
            ApiError::Store(msg) => {
                error!(error = %msg, "Store failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store_failure",
                    "Internal server error.".to_string(),
                    None,
                )
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error.".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    details.sort();
    details
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::InvalidArgument { message, .. } => ApiError::BadRequest(message),
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::StoreFailure { .. } => ApiError::Store(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_errors_map_to_status_codes() {
        let cases = [
            (PortError::invalid_argument("no code"), StatusCode::BAD_REQUEST),
            (PortError::not_found("Company", "C1"), StatusCode::NOT_FOUND),
            (PortError::store_failure("disk full"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (port_error, status) in cases {
            let response = ApiError::from(port_error).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_store_failure_message_is_not_leaked() {
        let api_error = ApiError::from(PortError::store_failure("password=hunter2"));
        assert!(matches!(api_error, ApiError::Store(ref m) if m.contains("hunter2")));
        assert_eq!(api_error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
