//! Handler: books.delete

use tracing::info;

use crate::book::BookRecord;
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt};

pub const ROUTE: Route = Route::delete("books.delete", "/api/books/:id");

pub fn guard<S>(_ctx: &Context<S>) -> bool {
    true
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let id = ctx.param("id")?;
    let books = ctx.store().documents::<BookRecord>();

    if !books.existence(id)?.is_found() {
        return Err(not_found(id));
    }

    let outcome = books.delete(id)?;
    // Someone else deleted it after our check; the caller sees the same
    // answer a second delete would get.
    if outcome.deleted_count == 0 {
        return Err(not_found(id));
    }
    info!(id, "book deleted");

    Reply::ok(&outcome)
}

fn not_found(id: &str) -> HandlerError {
    HandlerError::NotFound(format!("book {}", id))
}
