//! DocumentStore - abstract single-document operations over a collection.

use std::collections::BTreeSet;

use serde_json::Value;

use super::{DeleteOutcome, StoreError, UpdateOutcome};
use crate::document::{Document, Stored};

/// Abstract record store.
///
/// Every method is one round trip. Implementations must be safe to share
/// across request handlers; `insert` must be atomic with respect to the
/// id uniqueness check.
pub trait DocumentStore: Send + Sync {
    /// Make sure the collection for `D` exists. Idempotent.
    fn ensure_collection<D: Document>(&self) -> Result<(), StoreError>;

    /// Get a document by application id. Returns None if not found.
    fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<Stored<D>>, StoreError>;

    /// Every document in the collection, in store-native order.
    fn find_all<D: Document>(&self) -> Result<Vec<Stored<D>>, StoreError>;

    /// Insert a new document. Fails with `StoreError::Duplicate` if a
    /// document with the same id exists.
    fn insert<D: Document>(&self, document: &D) -> Result<Stored<D>, StoreError>;

    /// Replace the document stored under `id` with `document`.
    ///
    /// `document.id()` must equal `id`. Matching nothing is not an error;
    /// the outcome reports zero matched documents.
    fn update_by_id<D: Document>(&self, id: &str, document: &D)
        -> Result<UpdateOutcome, StoreError>;

    /// Delete the document stored under `id`. Deleting nothing is not an error.
    fn delete_by_id<D: Document>(&self, id: &str) -> Result<DeleteOutcome, StoreError>;

    /// Distinct non-empty string values of `field` across the collection.
    ///
    /// Scans the whole collection; the result is sorted but callers should
    /// not rely on any order.
    fn distinct<D: Document>(&self, field: &str) -> Result<Vec<String>, StoreError> {
        let mut values = BTreeSet::new();
        for stored in self.find_all::<D>()? {
            let document = serde_json::to_value(&stored.data)?;
            if let Some(value) = document.get(field).and_then(Value::as_str) {
                if !value.is_empty() {
                    values.insert(value.to_string());
                }
            }
        }
        Ok(values.into_iter().collect())
    }
}

pub(crate) fn check_replacement<D: Document>(id: &str, document: &D) -> Result<(), StoreError> {
    if document.id() == id {
        Ok(())
    } else {
        Err(StoreError::IdMismatch {
            expected: id.to_string(),
            actual: document.id().to_string(),
        })
    }
}
