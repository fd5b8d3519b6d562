//! Handler: authors.list

use crate::book::{AuthorEntry, BookRecord};
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt};

pub const ROUTE: Route = Route::get("authors.list", "/api/authors");

pub fn guard<S>(_ctx: &Context<S>) -> bool {
    true
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let authors: Vec<AuthorEntry> = ctx
        .store()
        .documents::<BookRecord>()
        .distinct("author")?
        .into_iter()
        .map(|author| AuthorEntry { author })
        .collect();

    Reply::ok(&authors)
}
