//! InMemoryStore - HashMap-backed document store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::store::check_replacement;
use super::{check_collection, DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use crate::document::{Document, StoreKey, Stored};

/// Internal stored representation of a document.
struct StoredDocument {
    key: StoreKey,
    seq: u64,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct Storage {
    documents: HashMap<String, StoredDocument>,
    next_seq: u64,
}

/// In-memory document store backed by a HashMap.
///
/// Storage key is `"COLLECTION:id"`, so the map itself enforces id
/// uniqueness. Clone-friendly via Arc; clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn decode<D: Document>(stored: &StoredDocument) -> Result<Stored<D>, StoreError> {
        Ok(Stored {
            key: stored.key.clone(),
            data: serde_json::from_slice(&stored.bytes)?,
        })
    }

    /// Number of documents across all collections.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.storage
            .read()
            .map(|storage| storage.documents.len())
            .map_err(|_| StoreError::LockPoisoned("len"))
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|len| len == 0)
    }
}

impl DocumentStore for InMemoryStore {
    fn ensure_collection<D: Document>(&self) -> Result<(), StoreError> {
        check_collection(D::COLLECTION)
    }

    fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        let key = Self::make_key(D::COLLECTION, id);
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_by_id"))?;

        storage.documents.get(&key).map(Self::decode::<D>).transpose()
    }

    fn find_all<D: Document>(&self) -> Result<Vec<Stored<D>>, StoreError> {
        let prefix = Self::make_key(D::COLLECTION, "");
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_all"))?;

        let mut matching: Vec<&StoredDocument> = storage
            .documents
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, stored)| stored)
            .collect();
        matching.sort_by_key(|stored| stored.seq);

        matching.into_iter().map(Self::decode::<D>).collect()
    }

    fn insert<D: Document>(&self, document: &D) -> Result<Stored<D>, StoreError> {
        let key = Self::make_key(D::COLLECTION, document.id());
        let bytes = serde_json::to_vec(document)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        if storage.documents.contains_key(&key) {
            return Err(StoreError::Duplicate {
                collection: D::COLLECTION.to_string(),
                id: document.id().to_string(),
            });
        }

        let store_key = StoreKey::generate();
        let seq = storage.next_seq;
        storage.next_seq += 1;
        storage.documents.insert(
            key,
            StoredDocument {
                key: store_key.clone(),
                seq,
                bytes,
            },
        );
        debug!(collection = D::COLLECTION, id = document.id(), key = %store_key, "inserted document");

        Ok(Stored {
            key: store_key,
            data: document.clone(),
        })
    }

    fn update_by_id<D: Document>(
        &self,
        id: &str,
        document: &D,
    ) -> Result<UpdateOutcome, StoreError> {
        check_replacement(id, document)?;
        let key = Self::make_key(D::COLLECTION, id);
        let bytes = serde_json::to_vec(document)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("update_by_id"))?;

        match storage.documents.get_mut(&key) {
            Some(stored) => {
                stored.bytes = bytes;
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 1,
                })
            }
            None => Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    fn delete_by_id<D: Document>(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        let key = Self::make_key(D::COLLECTION, id);
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete_by_id"))?;

        let deleted_count = u64::from(storage.documents.remove(&key).is_some());
        Ok(DeleteOutcome { deleted_count })
    }
}
