//! A record that disappears between the existence check and the write.

use bookstore::handlers;
use bookstore::microsvc::{HandlerError, Request, Service};
use bookstore::{
    BookRecord, DeleteOutcome, Document, DocumentStore, DocumentsExt, InMemoryStore, StoreError,
    Stored, UpdateOutcome,
};

/// Answers reads normally but finds nothing to touch on write, as if a
/// concurrent delete landed just before.
struct Vanishing(InMemoryStore);

impl DocumentStore for Vanishing {
    fn ensure_collection<D: Document>(&self) -> Result<(), StoreError> {
        self.0.ensure_collection::<D>()
    }

    fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        self.0.find_by_id(id)
    }

    fn find_all<D: Document>(&self) -> Result<Vec<Stored<D>>, StoreError> {
        self.0.find_all()
    }

    fn insert<D: Document>(&self, document: &D) -> Result<Stored<D>, StoreError> {
        self.0.insert(document)
    }

    fn update_by_id<D: Document>(
        &self,
        _id: &str,
        _document: &D,
    ) -> Result<UpdateOutcome, StoreError> {
        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
        })
    }

    fn delete_by_id<D: Document>(&self, _id: &str) -> Result<DeleteOutcome, StoreError> {
        Ok(DeleteOutcome { deleted_count: 0 })
    }
}

fn vanishing_service() -> Service<Vanishing> {
    let store = InMemoryStore::new();
    store
        .documents::<BookRecord>()
        .insert(&BookRecord::new("b1", "T", "A"))
        .unwrap();

    bookstore::register_handlers!(
        Service::new(Vanishing(store)),
        handlers::books_update,
        handlers::books_delete,
    )
}

#[test]
fn update_of_a_vanished_book_conflicts() {
    let service = vanishing_service();
    let err = service
        .dispatch(
            "books.update",
            Request::new()
                .with_param("id", "b1")
                .with_body(serde_json::json!({ "title": "T2", "author": "A" })),
        )
        .unwrap_err();

    assert!(matches!(err, HandlerError::Conflict(_)));
    assert_eq!(err.status_code(), 409);
}

#[test]
fn delete_of_a_vanished_book_is_not_found() {
    let service = vanishing_service();
    let err = service
        .dispatch("books.delete", Request::new().with_param("id", "b1"))
        .unwrap_err();

    assert!(matches!(err, HandlerError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}
