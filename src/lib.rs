//! phonebook - an in-memory HTTP resource server for phone company records

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod router;
pub mod store;
