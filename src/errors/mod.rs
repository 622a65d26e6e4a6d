use std::io;
use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

/// Failures a request can end in
#[derive(Debug, Error)]
pub enum ServerError {
    /// Requested document does not exist
    #[error("File not found: {0}")]
    NotFound(String),
    /// Requested path resolves outside the root directory
    #[error("Access denied")]
    AccessDenied,
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("request body is not valid UTF-8")]
    InvalidUtf8,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::AccessDenied => StatusCode::FORBIDDEN,
            ServerError::Io(_) | ServerError::InvalidUtf8 => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(_) | ServerError::AccessDenied => {
                (self.status(), self.to_string()).into_response()
            }
            ServerError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading file: {}", e),
            )
                .into_response(),
            ServerError::InvalidUtf8 => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading file: {}", self),
            )
                .into_response(),
        }
    }
}
