//! Handler: years.list

use crate::book::{BookRecord, YearEntry};
use crate::microsvc::{Context, HandlerError, Reply, Route};
use crate::store::{DocumentStore, DocumentsExt};

pub const ROUTE: Route = Route::get("years.list", "/api/years");

pub fn guard<S>(_ctx: &Context<S>) -> bool {
    true
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
    let years: Vec<YearEntry> = ctx
        .store()
        .documents::<BookRecord>()
        .distinct("year")?
        .into_iter()
        .map(|year| YearEntry { year })
        .collect();

    Reply::ok(&years)
}
