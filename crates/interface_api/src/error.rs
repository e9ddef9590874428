//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::{MoneyError, PortError};
use domain_intake::IntakeError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Rejected request body; `details` names the offending fields
    #[error("Validation error: {message}")]
    Validation { message: String, details: Vec<String> },
}

impl ApiError {
    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }
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
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
                None,
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg, None),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::StepIncomplete { ref missing, .. } => {
                let details = missing.iter().map(|f| f.key().to_string()).collect();
                ApiError::validation(err.to_string(), details)
            }
            IntakeError::Attachment(_) => {
                ApiError::validation(err.to_string(), vec!["policy_documents".to_string()])
            }
            IntakeError::Amount(_) => {
                ApiError::validation(err.to_string(), vec!["insurance_amount".to_string()])
            }
            IntakeError::Inconsistent(_) => ApiError::validation(err.to_string(), Vec::new()),
            IntakeError::NotAuthenticated => ApiError::Unauthorized,
            IntakeError::WizardClosed => ApiError::Internal(err.to_string()),
            IntakeError::Submission(port) => port.into(),
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { ref field, .. } => {
                let details = field.iter().cloned().collect();
                ApiError::validation(err.to_string(), details)
            }
            PortError::Unauthorized { .. } => ApiError::Unauthorized,
            PortError::Conflict { .. } => ApiError::BadRequest(err.to_string()),
            PortError::Timeout { .. }
            | PortError::Connection { .. }
            | PortError::ServiceUnavailable { .. } => ApiError::Unavailable(err.to_string()),
            PortError::Internal { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<MoneyError> for ApiError {
    fn from(err: MoneyError) -> Self {
        ApiError::validation(err.to_string(), vec!["insurance_amount".to_string()])
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
        details.sort();
        ApiError::validation("Request body failed validation", details)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingPermission(_) => ApiError::Forbidden(err.to_string()),
            AuthError::InvalidToken | AuthError::TokenExpired => ApiError::Unauthorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_intake::{Field, WizardStep};

    #[test]
    fn test_step_incomplete_lists_field_keys() {
        let err: ApiError = IntakeError::StepIncomplete {
            step: WizardStep::Incident,
            missing: vec![Field::HospitalName, Field::ClaimStatus],
        }
        .into();

        match err {
            ApiError::Validation { details, .. } => {
                assert_eq!(details, vec!["hospital_name", "claim_status"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(PortError::connection("down")).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(AuthError::MissingPermission("intake:read_all".into()))
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
    }
}
