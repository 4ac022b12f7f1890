//! # Path Parsing
//!
//! Maps a request path onto one of the two company route shapes.

use super::errors::{RouteError, RouteResult};

/// Collection path
pub const COMPANIES_PATH: &str = "/companies";

const ITEM_PREFIX: &str = "/companies/";

/// A recognized route shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/companies`
    Collection,
    /// `/companies/<id>`
    Item(i64),
}

impl Route {
    /// Parse a request path (without query string).
    ///
    /// Anything under `/companies/` must split into exactly three segments
    /// with an integer last segment, otherwise it is an invalid identifier.
    pub fn parse(path: &str) -> RouteResult<Self> {
        if path == COMPANIES_PATH {
            return Ok(Route::Collection);
        }

        if !path.starts_with(ITEM_PREFIX) {
            return Err(RouteError::UnknownPath);
        }

        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != 3 {
            return Err(RouteError::InvalidIdentifier);
        }

        segments[2]
            .parse::<i64>()
            .map(Route::Item)
            .map_err(|_| RouteError::InvalidIdentifier)
    }
}
