//! Stores - the record store capability every service is built on.
//!
//! A [`DocumentStore`] holds typed documents in named collections and
//! addresses them by application id. Two backends ship with the crate:
//!
//! - [`InMemoryStore`] - HashMap-backed, process-local. Tests and demos.
//! - [`SqliteStore`] - one SQLite file shared by every service process
//!   (requires the `sqlite` feature).
//!
//! [`connect`] opens either one from a connection string.

mod connect;
mod in_memory;
mod repository;
#[cfg(feature = "sqlite")]
mod sqlite;
mod store;

use serde::{Deserialize, Serialize};

pub use connect::{connect, AnyStore};
pub use in_memory::InMemoryStore;
pub use repository::{DocumentRepository, DocumentsExt};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
pub use store::DocumentStore;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A document with this id already exists in the collection.
    #[error("document {collection}:{id} already exists")]
    Duplicate { collection: String, id: String },
    /// A replacement document carries a different id than the one addressed.
    #[error("replacement for {expected} carries id {actual}")]
    IdMismatch { expected: String, actual: String },
    /// Collection name is not usable as a storage identifier.
    #[error("invalid collection name: {0}")]
    InvalidCollection(String),
    /// The connection string names no supported backend.
    #[error("unsupported database uri: {0}")]
    UnsupportedUri(String),
    /// Serialization/deserialization error.
    #[error("document serialization error: {0}")]
    Serde(String),
    /// Lock poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// Storage-level error (connectivity, I/O, SQL).
    #[error("document storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

#[cfg(feature = "sqlite")]
impl From<::sqlite::Error> for StoreError {
    fn from(err: ::sqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Result of replacing a document by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of deleting a document by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Collection names become table names; keep them to `[A-Za-z0-9_]+`.
pub(crate) fn check_collection(name: &str) -> Result<(), StoreError> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(name.to_string()))
    }
}
