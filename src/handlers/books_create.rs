//! Handler: books.create
//!
//! Validate, run the existence check, insert. The insert itself refuses
//! duplicates, so a create racing past the check still ends in a conflict.

use serde::Serialize;
use tracing::info;

use crate::book::{validation, BookRecord};
use crate::document::StoreKey;
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt, StoreError};

pub const ROUTE: Route = Route::post("books.create", "/api/books");

/// Body of a successful create.
#[derive(Serialize)]
pub struct Created {
    pub inserted_id: StoreKey,
    pub book: BookRecord,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_body()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let book = ctx.input::<BookRecord>()?;
    validation::check_new(&book)?;

    let books = ctx.store().documents::<BookRecord>();
    if books.existence(&book.id)?.is_found() {
        return Err(already_exists(&book.id));
    }

    let stored = books.insert(&book).map_err(|err| match err {
        StoreError::Duplicate { id, .. } => already_exists(&id),
        other => HandlerError::Store(other),
    })?;
    info!(id = %stored.data.id, key = %stored.key, "book created");

    Reply::created(&Created {
        inserted_id: stored.key,
        book: stored.data,
    })
}

fn already_exists(id: &str) -> HandlerError {
    HandlerError::Conflict(format!("book {} already exists", id))
}
