//! Mapping from use case errors onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use skillwire_usecase::UseCaseError;
use tracing::error;

use super::dto::ErrorBody;

/// Errors surfaced by the HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Nothing to return; answered with an empty 404
    NotFound,
    /// Server-side failure; details are logged, not returned
    Internal(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::NoSkills => ApiError::NotFound,
            UseCaseError::Output(io_err) => ApiError::Internal(io_err.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => HttpResponse::NotFound().finish(),
            ApiError::Internal(message) => {
                error!(error = %message, "request failed");
                HttpResponse::InternalServerError().json(ErrorBody {
                    code: "internal_error".to_string(),
                    message: "Internal server error".to_string(),
                })
            }
        }
    }
}
