//! Opening a store from a connection string.
//!
//! Supported schemes:
//!
//! - `memory://` - process-local [`InMemoryStore`]
//! - `sqlite://<path>` - [`SqliteStore`] on a file, e.g. `sqlite://books.db`
//!   or `sqlite:///var/lib/bookstore/books.db`
//! - `sqlite::memory:` - private in-memory SQLite database

use tracing::info;

#[cfg(feature = "sqlite")]
use super::SqliteStore;
use super::{DeleteOutcome, DocumentStore, InMemoryStore, StoreError, UpdateOutcome};
use crate::document::{Document, Stored};

/// A store chosen at runtime from a connection string.
#[derive(Clone)]
pub enum AnyStore {
    Memory(InMemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

/// Open the store named by `uri`.
///
/// Blocks while the backend opens and pings its storage; run it on a
/// blocking thread under a timeout when called from async code.
pub fn connect(uri: &str) -> Result<AnyStore, StoreError> {
    let uri = uri.trim();

    if uri == "memory://" || uri == "memory:" {
        info!("using in-memory store");
        return Ok(AnyStore::Memory(InMemoryStore::new()));
    }

    #[cfg(feature = "sqlite")]
    {
        if uri == "sqlite::memory:" {
            info!("using private in-memory sqlite store");
            return SqliteStore::open_in_memory().map(AnyStore::Sqlite);
        }
        if let Some(path) = uri.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err(StoreError::UnsupportedUri(uri.to_string()));
            }
            info!(path, "using sqlite store");
            return SqliteStore::open(path).map(AnyStore::Sqlite);
        }
    }

    Err(StoreError::UnsupportedUri(uri.to_string()))
}

impl AnyStore {
    /// Short backend name for logs and health output.
    pub fn backend(&self) -> &'static str {
        match self {
            AnyStore::Memory(_) => "memory",
            #[cfg(feature = "sqlite")]
            AnyStore::Sqlite(_) => "sqlite",
        }
    }
}

macro_rules! delegate {
    ($self:ident, $store:ident => $call:expr) => {
        match $self {
            AnyStore::Memory($store) => $call,
            #[cfg(feature = "sqlite")]
            AnyStore::Sqlite($store) => $call,
        }
    };
}

impl DocumentStore for AnyStore {
    fn ensure_collection<D: Document>(&self) -> Result<(), StoreError> {
        delegate!(self, store => store.ensure_collection::<D>())
    }

    fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        delegate!(self, store => store.find_by_id(id))
    }

    fn find_all<D: Document>(&self) -> Result<Vec<Stored<D>>, StoreError> {
        delegate!(self, store => store.find_all())
    }

    fn insert<D: Document>(&self, document: &D) -> Result<Stored<D>, StoreError> {
        delegate!(self, store => store.insert(document))
    }

    fn update_by_id<D: Document>(
        &self,
        id: &str,
        document: &D,
    ) -> Result<UpdateOutcome, StoreError> {
        delegate!(self, store => store.update_by_id(id, document))
    }

    fn delete_by_id<D: Document>(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        delegate!(self, store => store.delete_by_id::<D>(id))
    }

    fn distinct<D: Document>(&self, field: &str) -> Result<Vec<String>, StoreError> {
        delegate!(self, store => store.distinct::<D>(field))
    }
}
