//! Company Store Invariant Tests
//!
//! Tests for the guarantees the store gives its callers:
//! - Ids are unique and strictly increasing, even across deletions
//! - Reads observe completed writes
//! - Updates keep the id and overwrite every field
//! - Deletes remove exactly one record
//! - Missing ids fail the same way every time

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use phonebook::store::{CompanyFields, CompanyStore, InMemoryCompanyStore, StoreError};

// =============================================================================
// Test Utilities
// =============================================================================

fn fields(n: i64) -> CompanyFields {
    CompanyFields::new(
        format!("Company {}", n),
        "US",
        1900 + n,
        format!("carrier number {}", n),
    )
}

// =============================================================================
// Id Allocation
// =============================================================================

#[test]
fn test_ids_are_pairwise_distinct() {
    let store = InMemoryCompanyStore::new();

    let ids: Vec<i64> = (0..50).map(|n| store.create(fields(n)).id).collect();
    let unique: HashSet<i64> = ids.iter().copied().collect();

    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_ids_strictly_increase_across_deletions() {
    let store = InMemoryCompanyStore::new();
    let mut highest = 0;

    for n in 0..20 {
        let company = store.create(fields(n));
        assert!(
            company.id > highest,
            "id {} not greater than previous {}",
            company.id,
            highest
        );
        highest = company.id;

        // Delete every other record, including the newest one
        if n % 2 == 0 {
            store.delete(company.id).unwrap();
        }
    }

    store.delete(highest).unwrap();
    assert!(store.create(fields(99)).id > highest);
}

#[test]
fn test_concurrent_creates_never_share_an_id() {
    let store = Arc::new(InMemoryCompanyStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..25)
                    .map(|n| store.create(fields(t * 100 + n)).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 200);
    assert_eq!(ids.iter().max(), Some(&200));
}

// =============================================================================
// Reads and Writes
// =============================================================================

#[test]
fn test_read_your_write() {
    let store = InMemoryCompanyStore::new();

    for n in 0..10 {
        let created = store.create(fields(n));
        assert_eq!(store.get(created.id).unwrap(), created);
    }
}

#[test]
fn test_update_preserves_identity() {
    let store = InMemoryCompanyStore::new();
    let created = store.create(fields(1));

    let replacement = CompanyFields::new("Renamed", "FI", 1865, "");
    store.update(created.id, replacement.clone()).unwrap();

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.clone().into_fields(), replacement);
}

#[test]
fn test_update_does_not_touch_other_records() {
    let store = InMemoryCompanyStore::new();
    let first = store.create(fields(1));
    let second = store.create(fields(2));

    store.update(first.id, fields(3)).unwrap();

    assert_eq!(store.get(second.id).unwrap(), second);
}

#[test]
fn test_delete_removes_exactly_one() {
    let store = InMemoryCompanyStore::new();
    let ids: Vec<i64> = (0..5).map(|n| store.create(fields(n)).id).collect();

    let before = store.list().len();
    store.delete(ids[2]).unwrap();

    assert_eq!(store.list().len(), before - 1);
    assert_eq!(store.get(ids[2]), Err(StoreError::NotFound(ids[2])));
    for id in [ids[0], ids[1], ids[3], ids[4]] {
        assert!(store.get(id).is_ok());
    }
}

#[test]
fn test_list_keeps_insertion_order() {
    let store = InMemoryCompanyStore::new();
    for n in 0..5 {
        store.create(fields(n));
    }
    store.delete(1).unwrap();

    let ids: Vec<i64> = store.list().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
}

// =============================================================================
// Missing Ids
// =============================================================================

#[test]
fn test_never_assigned_id_is_not_found_repeatably() {
    let store = InMemoryCompanyStore::new();
    store.create(fields(1));

    for _ in 0..3 {
        assert_eq!(store.get(42), Err(StoreError::NotFound(42)));
        assert_eq!(store.update(42, fields(2)), Err(StoreError::NotFound(42)));
        assert_eq!(store.delete(42), Err(StoreError::NotFound(42)));
    }

    assert_eq!(store.len(), 1);
}

#[test]
fn test_deleted_id_is_not_found_repeatably() {
    let store = InMemoryCompanyStore::new();
    let created = store.create(fields(1));
    store.delete(created.id).unwrap();

    for _ in 0..3 {
        assert!(store.get(created.id).is_err());
        assert!(store.update(created.id, fields(2)).is_err());
        assert!(store.delete(created.id).is_err());
    }

    assert!(store.is_empty());
}
