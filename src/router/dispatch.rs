//! # Request Dispatch
//!
//! Translates method + path + body into a store call. Nothing here knows
//! about sockets or axum extractors.

use axum::http::Method;

use crate::store::{Company, CompanyFields, CompanyStore};

use super::errors::{RouteError, RouteResult};
use super::path::Route;
use super::response::Outcome;

/// Route a single request against the store
pub fn route<S>(store: &S, method: &Method, path: &str, body: &[u8]) -> RouteResult<Outcome>
where
    S: CompanyStore + ?Sized,
{
    match Route::parse(path)? {
        Route::Collection => collection(store, method, body),
        Route::Item(id) => item(store, method, id, body),
    }
}

fn collection<S>(store: &S, method: &Method, body: &[u8]) -> RouteResult<Outcome>
where
    S: CompanyStore + ?Sized,
{
    match *method {
        Method::GET => Ok(Outcome::Listed(store.list())),
        Method::POST => {
            let fields = decode_body(body)?;
            Ok(Outcome::Created(store.create(fields)))
        }
        _ => Err(RouteError::MethodNotAllowed),
    }
}

fn item<S>(store: &S, method: &Method, id: i64, body: &[u8]) -> RouteResult<Outcome>
where
    S: CompanyStore + ?Sized,
{
    match *method {
        Method::GET => Ok(Outcome::Found(store.get(id)?)),
        Method::PUT => {
            let fields = decode_body(body)?;
            Ok(Outcome::Found(store.update(id, fields)?))
        }
        Method::DELETE => {
            store.delete(id)?;
            Ok(Outcome::NoContent)
        }
        _ => Err(RouteError::MethodNotAllowed),
    }
}

/// Decode a request body. Any `id` it carries is discarded.
fn decode_body(body: &[u8]) -> RouteResult<CompanyFields> {
    let company: Company = serde_json::from_slice(body)?;
    Ok(company.into_fields())
}
