//! # Phonebook HTTP Server Module
//!
//! Serves the company router over HTTP with axum.
//!
//! # Endpoints
//!
//! - `/companies` - list and create companies
//! - `/companies/{id}` - read, overwrite and delete one company

pub mod company_routes;
pub mod config;
pub mod server;

pub use company_routes::company_routes;
pub use config::HttpServerConfig;
pub use server::HttpServer;
