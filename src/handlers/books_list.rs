//! Handler: books.list
//!
//! Every record, unfiltered, in store order.

use crate::book::BookRecord;
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt};

pub const ROUTE: Route = Route::get("books.list", "/api/books");

pub fn guard<S>(_ctx: &Context<S>) -> bool {
    true
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let books: Vec<BookRecord> = ctx
        .store()
        .documents::<BookRecord>()
        .all()?
        .into_iter()
        .map(|stored| stored.data)
        .collect();

    Reply::ok(&books)
}
