//! Bookstore CRUD split into microservices over one shared collection.
//!
//! Each service binary registers the handlers it owns on a
//! [`microsvc::Service`] and serves them over HTTP. All of them talk to
//! the same [`DocumentStore`], so a book created by one service is
//! immediately visible to the others.

extern crate self as bookstore;

pub mod book;
pub mod config;
mod document;
pub mod handlers;
pub mod microsvc;
#[cfg(feature = "http")]
pub mod runtime;
pub mod store;
pub mod telemetry;

pub use book::{AuthorEntry, BookRecord, YearEntry};
pub use document::{Document, Existence, StoreKey, Stored};
pub use store::{
    connect, AnyStore, DeleteOutcome, DocumentRepository, DocumentStore, DocumentsExt,
    InMemoryStore, StoreError, UpdateOutcome,
};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;

// Derive macro, same name as the trait.
pub use bookstore_macros::Document;
