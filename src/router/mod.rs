//! # Company Router
//!
//! Maps an HTTP method and path onto a [`CompanyStore`](crate::store::CompanyStore)
//! operation and turns the result into a transport outcome.
//!
//! # Routes
//!
//! - `GET /companies` - list all companies
//! - `POST /companies` - create a company
//! - `GET /companies/{id}` - fetch one company
//! - `PUT /companies/{id}` - overwrite one company
//! - `DELETE /companies/{id}` - delete one company

pub mod dispatch;
pub mod errors;
pub mod path;
pub mod response;

pub use dispatch::route;
pub use errors::{RouteError, RouteResult};
pub use path::{Route, COMPANIES_PATH};
pub use response::Outcome;
