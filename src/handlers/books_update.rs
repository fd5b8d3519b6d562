//! Handler: books.update
//!
//! Full replacement of an existing record. Order matters: required
//! fields first, then existence, then the path/body id check.

use tracing::{info, warn};

use crate::book::{validation, BookRecord};
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt};

pub const ROUTE: Route = Route::put("books.update", "/api/books/:id");

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_body()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let id = ctx.param("id")?;
    let book = ctx.input::<BookRecord>()?;
    validation::check_replacement(&book)?;

    let books = ctx.store().documents::<BookRecord>();
    if !books.existence(id)?.is_found() {
        return Err(HandlerError::NotFound(format!("book {}", id)));
    }

    let book = validation::reconcile_id(id, book)?;
    let outcome = books.replace(id, &book)?;
    if outcome.matched_count == 0 {
        warn!(id, "book vanished between existence check and update");
        return Err(HandlerError::Conflict(format!(
            "book {} was modified concurrently",
            id
        )));
    }
    info!(id, "book updated");

    Reply::ok(&outcome)
}
