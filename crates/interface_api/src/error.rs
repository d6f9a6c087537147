//! API error handling
//!
//! Maps domain failures onto consistent JSON error responses. Validation
//! failures carry the full field-to-message map so the quote form can
//! highlight every invalid field at once; policy misconfiguration is
//! reported under the `policy` key so it is never mistaken for bad input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use domain_pricing::{QuoteError, ValidationErrors};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Policy misconfigured: {0}")]
    PolicyMisconfigured(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, fields) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "One or more fields are invalid".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            ApiError::PolicyMisconfigured(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "policy_misconfigured",
                msg.clone(),
                Some(json!({ "policy": msg })),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Terms(terms) => ApiError::PolicyMisconfigured(terms.to_string()),
            QuoteError::Validation(errors) => ApiError::Validation(errors),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}
