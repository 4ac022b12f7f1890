//! # Company Store
//!
//! Owns the company collection and the id allocator. All reads and writes of
//! that state go through [`CompanyStore`].

pub mod company;
pub mod errors;
pub mod repository;

pub use company::{Company, CompanyFields};
pub use errors::{StoreError, StoreResult};
pub use repository::{CompanyStore, InMemoryCompanyStore};
