//! Shared fixtures: a service with every handler over a fresh store.

use bookstore::handlers;
use bookstore::microsvc::{HandlerError, Reply, Request, Service};
use bookstore::{BookRecord, DocumentsExt, InMemoryStore};
use serde_json::{json, Value};

pub fn full_service() -> Service<InMemoryStore> {
    bookstore::register_handlers!(
        Service::new(InMemoryStore::new()),
        handlers::books_list,
        handlers::authors_list,
        handlers::years_list,
        handlers::books_create,
        handlers::books_update,
        handlers::books_delete,
    )
}

pub fn book(id: &str, title: &str, author: &str) -> Value {
    json!({ "id": id, "title": title, "author": author })
}

pub fn create(service: &Service<InMemoryStore>, body: Value) -> Result<Reply, HandlerError> {
    service.dispatch("books.create", Request::new().with_body(body))
}

pub fn update(
    service: &Service<InMemoryStore>,
    id: &str,
    body: Value,
) -> Result<Reply, HandlerError> {
    service.dispatch(
        "books.update",
        Request::new().with_param("id", id).with_body(body),
    )
}

pub fn delete(service: &Service<InMemoryStore>, id: &str) -> Result<Reply, HandlerError> {
    service.dispatch("books.delete", Request::new().with_param("id", id))
}

pub fn list(service: &Service<InMemoryStore>) -> Vec<Value> {
    let reply = service.dispatch("books.list", Request::new()).unwrap();
    assert_eq!(reply.status, 200);
    reply.body.as_array().cloned().unwrap()
}

/// Records straight from the store, bypassing the handlers.
pub fn stored(service: &Service<InMemoryStore>) -> Vec<BookRecord> {
    service
        .store()
        .documents::<BookRecord>()
        .all()
        .unwrap()
        .into_iter()
        .map(|stored| stored.data)
        .collect()
}
