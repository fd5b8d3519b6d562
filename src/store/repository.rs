//! DocumentRepository - typed accessor for one collection of a store.

use std::marker::PhantomData;

use super::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use crate::document::{Document, Existence, Stored};

/// Typed repository wrapper for accessing documents of a specific type.
pub struct DocumentRepository<'a, S, D> {
    store: &'a S,
    _marker: PhantomData<D>,
}

impl<'a, S: DocumentStore, D: Document> DocumentRepository<'a, S, D> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Existence check: `Found` with the stored document, or `NotFound`.
    ///
    /// Store failures come back as `Err`, never as `NotFound`.
    pub fn existence(&self, id: &str) -> Result<Existence<D>, StoreError> {
        self.store.find_by_id::<D>(id).map(Existence::from)
    }

    /// Get a document by id.
    pub fn get(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        self.store.find_by_id(id)
    }

    /// Every document in the collection.
    pub fn all(&self) -> Result<Vec<Stored<D>>, StoreError> {
        self.store.find_all()
    }

    /// Distinct non-empty values of a string field.
    pub fn distinct(&self, field: &str) -> Result<Vec<String>, StoreError> {
        self.store.distinct::<D>(field)
    }

    /// Insert a new document. Fails if the id is taken.
    pub fn insert(&self, document: &D) -> Result<Stored<D>, StoreError> {
        self.store.insert(document)
    }

    /// Replace the document stored under `id`.
    pub fn replace(&self, id: &str, document: &D) -> Result<UpdateOutcome, StoreError> {
        self.store.update_by_id(id, document)
    }

    /// Delete the document stored under `id`.
    pub fn delete(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        self.store.delete_by_id::<D>(id)
    }
}

/// Extension trait for typed document access on any DocumentStore.
pub trait DocumentsExt: DocumentStore + Sized {
    /// Get a typed document repository.
    fn documents<D: Document>(&self) -> DocumentRepository<'_, Self, D> {
        DocumentRepository::new(self)
    }
}

impl<S: DocumentStore> DocumentsExt for S {}
