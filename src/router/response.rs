//! # Routed Outcomes
//!
//! Successful results of a routed request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::Company;

/// Successful outcome of a routed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A company was stored (201)
    Created(Company),
    /// A single company was read or updated (200)
    Found(Company),
    /// The whole collection, possibly empty (200)
    Listed(Vec<Company>),
    /// A company was deleted (204)
    NoContent,
}

impl Outcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Outcome::Created(_) => StatusCode::CREATED,
            Outcome::Found(_) | Outcome::Listed(_) => StatusCode::OK,
            Outcome::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Outcome::Created(company) | Outcome::Found(company) => {
                (status, Json(company)).into_response()
            }
            Outcome::Listed(companies) => (status, Json(companies)).into_response(),
            Outcome::NoContent => status.into_response(),
        }
    }
}
