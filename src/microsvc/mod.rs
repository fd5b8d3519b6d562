//! microsvc: convention-based route handler framework.
//!
//! Build a microservice by registering route handlers on a `Service`.
//! Each handler receives a `Context<S>` with access to path parameters,
//! the JSON body, and the store. One process registers only the routes
//! it owns; the all-in-one service registers all of them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookstore::{microsvc, InMemoryStore};
//!
//! let service = Arc::new(
//!     microsvc::Service::new(InMemoryStore::new())
//!         .route(Route::get("books.list", "/api/books"), |ctx| {
//!             let books = ctx.store().documents::<BookRecord>().all()?;
//!             Reply::ok(&books)
//!         })
//! );
//!
//! // Direct dispatch
//! let reply = service.dispatch("books.list", Request::new());
//!
//! // HTTP transport (requires "http" feature)
//! // microsvc::serve(service, "0.0.0.0:3001".parse()?).await?;
//! ```
//!
//! ## Handler Convention
//!
//! Each handler file follows this convention:
//!
//! ```ignore
//! // src/handlers/books_delete.rs
//!
//! pub const ROUTE: Route = Route::delete("books.delete", "/api/books/:id");
//!
//! pub fn guard<S>(_ctx: &Context<S>) -> bool {
//!     true
//! }
//!
//! pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Reply, HandlerError> {
//!     let id = ctx.param("id")?;
//!     // ...
//! }
//! ```

mod context;
mod error;
mod route;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use route::{Method, Reply, Request, Route};
pub use service::Service;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve, serve_listener};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `ROUTE: Route`: name, method and path template
/// - `guard(ctx) -> bool`: input validation
/// - `handle(ctx) -> Result<Reply, HandlerError>`: the handler
///
/// # Example
/// ```ignore
/// let service = bookstore::register_handlers!(
///     microsvc::Service::new(InMemoryStore::new()),
///     handlers::books_create,
///     handlers::books_list,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .route_guarded(
                $($seg)::+::ROUTE,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
