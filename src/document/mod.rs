//! Documents - typed records kept in a named collection.
//!
//! A document is addressed by its application-level `id`, never by the
//! key the store assigns internally. The key travels alongside the data
//! in [`Stored`] so it can be reported once, on insert, and nowhere else.
//!
//! ## Example
//!
//! ```ignore
//! use bookstore::{Document, DocumentsExt, InMemoryStore};
//!
//! #[derive(Serialize, Deserialize, Clone, Document)]
//! #[document(collection = "books")]
//! struct BookRecord {
//!     #[document(id)]
//!     pub id: String,
//!     pub title: String,
//! }
//!
//! let store = InMemoryStore::new();
//! store.documents::<BookRecord>().insert(&book)?;
//! let found = store.documents::<BookRecord>().existence("b1")?;
//! ```

mod key;

use serde::{de::DeserializeOwned, Serialize};

pub use key::StoreKey;

/// Trait for types that can be stored as documents.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this document type (e.g., "books").
    /// Becomes a table name in SQLite and a key prefix in memory.
    const COLLECTION: &'static str;

    /// Returns the application-level identifier of this document.
    fn id(&self) -> &str;
}

/// A document together with the key the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored<T> {
    pub key: StoreKey,
    pub data: T,
}

/// Outcome of an existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence<T> {
    Found(Stored<T>),
    NotFound,
}

impl<T> Existence<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Existence::Found(_))
    }
}

impl<T> From<Option<Stored<T>>> for Existence<T> {
    fn from(value: Option<Stored<T>>) -> Self {
        match value {
            Some(stored) => Existence::Found(stored),
            None => Existence::NotFound,
        }
    }
}
