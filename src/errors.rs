use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::model_service::GenerationError;

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate quiz";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Quiz generation failed: {0}")]
    UpstreamGeneration(String),

    #[error("Invalid number of questions generated. Expected {expected}, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::UpstreamGeneration(_) => "UPSTREAM_GENERATION_FAILURE",
            AppError::CountMismatch { .. } => "COUNT_MISMATCH",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Text placed in the response body. Upstream and configuration detail
    /// stays in the server log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::UpstreamGeneration(_) => GENERATION_FAILED_MESSAGE.to_string(),
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CountMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed [{}]: {}", self.error_code(), self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::UpstreamGeneration(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
