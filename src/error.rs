//! Error types for the Alexandria REST services

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::support::problem::{self, ProblemError};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request validation failed")]
    InvalidRequest(Vec<ProblemError>),

    #[error("{title}: {detail}")]
    UnknownEntity { title: String, detail: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unknown_entity(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::UnknownEntity {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = match self {
            AppError::InvalidRequest(errors) => problem::invalid_request(errors),
            AppError::UnknownEntity { title, detail } => problem::unknown_entity(title, detail),
            AppError::Internal(message) => {
                tracing::error!("Internal error: {message}");
                problem::internal_error()
            }
        };
        problem.into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
