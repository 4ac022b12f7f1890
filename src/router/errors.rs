//! # Routing Errors
//!
//! Every failure is the caller's fault and maps to a 4xx status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for routed requests
pub type RouteResult<T> = Result<T, RouteError>;

/// Routing errors
///
/// The `Display` text is the plain-text response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    // ==================
    // Client Errors (400)
    // ==================
    /// Id token is not an integer, or the item path has extra segments
    #[error("Invalid company ID")]
    InvalidIdentifier,

    /// Request body failed to decode; carries the decoder's message
    #[error("{0}")]
    InvalidBody(String),

    // ==================
    // Not Found (404)
    // ==================
    /// Well-formed id with no matching record
    #[error("Company not found")]
    CompanyNotFound,

    /// Path outside the company routes
    #[error("404 not found")]
    UnknownPath,

    // ==================
    // Method Not Allowed (405)
    // ==================
    #[error("Invalid request method")]
    MethodNotAllowed,
}

impl RouteError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            RouteError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RouteError::CompanyNotFound => StatusCode::NOT_FOUND,
            RouteError::UnknownPath => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for RouteError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => RouteError::CompanyNotFound,
        }
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::InvalidBody(err.to_string())
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
