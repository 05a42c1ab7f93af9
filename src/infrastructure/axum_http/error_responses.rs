use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::{
    application::usecases::subscriptions::SubscriptionError,
    domain::value_objects::pix_key_request::{FieldError, ValidationError},
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request data: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<SubscriptionError> for AppError {
    fn from(value: SubscriptionError) -> Self {
        match value {
            SubscriptionError::Validation(err) => AppError::Validation(err),
            SubscriptionError::SubscriptionNotFound => {
                AppError::NotFound("Subscription not found".to_string())
            }
            SubscriptionError::Internal(err) => AppError::Internal(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    code: "validation_error",
                    error: "Invalid request data".to_string(),
                    details: Some(err.to_string()),
                    fields: Some(err.fields),
                },
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    code: "bad_request",
                    error: message,
                    details: None,
                    fields: None,
                },
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    code: "not_found",
                    error: message,
                    details: None,
                    fields: None,
                },
            ),
            AppError::Internal(err) => {
                // Detail stays in the logs only.
                error!(error = ?err, "http: internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        code: "internal_error",
                        error: "Internal server error".to_string(),
                        details: None,
                        fields: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
