//! # Company Repository
//!
//! The store trait the router depends on, and its in-memory implementation.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::Event;

use super::company::{Company, CompanyFields};
use super::errors::{StoreError, StoreResult};

/// Store trait for company operations
pub trait CompanyStore: Send + Sync {
    /// Store a new company under a freshly allocated id
    fn create(&self, fields: CompanyFields) -> Company;

    /// All companies in storage order
    fn list(&self) -> Vec<Company>;

    /// Get a single company by id
    fn get(&self, id: i64) -> StoreResult<Company>;

    /// Overwrite every mutable field of a company
    fn update(&self, id: i64, fields: CompanyFields) -> StoreResult<Company>;

    /// Remove a company
    fn delete(&self, id: i64) -> StoreResult<()>;
}

/// Records plus the id allocator, always locked together
#[derive(Debug)]
struct Collection {
    companies: Vec<Company>,
    /// Next id to hand out. Never decreases, never reused.
    next_id: i64,
}

impl Collection {
    fn position(&self, id: i64) -> Option<usize> {
        self.companies.iter().position(|c| c.id == id)
    }
}

/// In-memory company store
///
/// Lookups are linear scans over a `Vec`, which keeps listing in insertion
/// order. Every operation holds the lock for its whole duration.
#[derive(Debug)]
pub struct InMemoryCompanyStore {
    collection: RwLock<Collection>,
}

impl InMemoryCompanyStore {
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(Collection {
                companies: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored companies
    pub fn len(&self) -> usize {
        self.read().companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No operation can panic halfway through a mutation, so a poisoned lock
    // still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, Collection> {
        self.collection.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collection> {
        self.collection.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCompanyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyStore for InMemoryCompanyStore {
    fn create(&self, fields: CompanyFields) -> Company {
        let mut collection = self.write();

        let id = collection.next_id;
        collection.next_id += 1;

        let company = fields.with_id(id);
        collection.companies.push(company.clone());

        tracing::debug!(event = %Event::CompanyCreated, id, count = collection.companies.len());
        company
    }

    fn list(&self) -> Vec<Company> {
        self.read().companies.clone()
    }

    fn get(&self, id: i64) -> StoreResult<Company> {
        self.read()
            .companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: i64, fields: CompanyFields) -> StoreResult<Company> {
        let mut collection = self.write();

        let company = collection
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        company.overwrite(fields);

        tracing::debug!(event = %Event::CompanyUpdated, id);
        Ok(company.clone())
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let mut collection = self.write();

        let idx = collection.position(id).ok_or(StoreError::NotFound(id))?;
        collection.companies.remove(idx);

        tracing::debug!(event = %Event::CompanyDeleted, id, count = collection.companies.len());
        Ok(())
    }
}
