use crate::validation::ValidationErrors;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::persistence::error::StoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const BUSINESS_RULE_ERROR: &str = "BUSINESS_RULE_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },
    #[error("not found: `{0}`")]
    NotFound(String),
    #[error("business rule rejected: `{0}`")]
    BusinessRule(String),
    #[error("store error: `{0}`")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>, errors: ValidationErrors) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation("Validation failed", errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(message, VALIDATION_ERROR, errors.into_details()),
            ),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(message, NOT_FOUND),
            ),
            Self::BusinessRule(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, BUSINESS_RULE_ERROR),
            ),
            Self::Store(e) => {
                tracing::error!("unclassified store error: `{e}`");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Something went wrong".to_string(), INTERNAL_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Failure half of the response envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: String, code: &str) -> Self {
        Self {
            success: false,
            error,
            code: code.to_string(),
            details: None,
        }
    }

    fn with_details(error: String, code: &str, details: serde_json::Value) -> Self {
        Self {
            success: false,
            error,
            code: code.to_string(),
            details: Some(details),
        }
    }
}
