use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaViolation;
use crate::services::llm::GenerationError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(#[from] SchemaViolation),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recommendation generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = ErrorResponse {
            error: self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(SchemaViolation::new("genres", "at least one genre"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("genres"));
    }

    #[test]
    fn test_generation_maps_to_bad_gateway() {
        let err = ApiError::from(GenerationError::EmptyContent);
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_startup_failures_map_to_internal_error() {
        let err = ApiError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(anyhow::anyhow!("Failed to initialize cover resolver"));
        assert!(matches!(err, ApiError::InternalError(_)));
    }

    #[test]
    fn test_config_maps_to_internal_error() {
        let err = ApiError::ConfigError("APP_LLM_API_KEY must be set".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
