//! Error types for the API server
//!
//! Every failure a handler can produce maps to a status code and a
//! `{"message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

// == Response Messages ==
pub const INPUT_MUST_BE_NUMBER: &str = "Input must be a number";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const BOOK_TITLE_REQUIRED: &str = "Book title is required";
pub const BAD_REQUEST: &str = "Bad Request";
pub const USER_NOT_FOUND: &str = "User not found";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong, please try again later";
pub const SECURITY_QUESTIONS_ANSWERED: &str = "Security questions successfully answered";

// == Api Error Enum ==
/// Unified error type for the API server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity or route does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Security answers did not match
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unexpected fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    pub fn book_not_found() -> Self {
        ApiError::NotFound(BOOK_NOT_FOUND.to_string())
    }

    pub fn internal() -> Self {
        ApiError::Internal(SOMETHING_WENT_WRONG.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(MessageResponse::new(self.message()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API server.
pub type Result<T> = std::result::Result<T, ApiError>;
