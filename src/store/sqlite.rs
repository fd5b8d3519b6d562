//! SqliteStore - one SQLite file shared by every service process.
//!
//! Each collection is a table `(seq, key, id UNIQUE, body)` holding the
//! document as JSON text. The `UNIQUE` constraint on `id` is the atomic
//! insert-if-absent primitive; replacements and deletions run inside
//! `BEGIN IMMEDIATE` so their matched counts hold across processes.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use sqlite::{Connection, State, Statement};
use tracing::{debug, warn};

use super::store::check_replacement;
use super::{check_collection, DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use crate::document::{Document, StoreKey, Stored};

/// Milliseconds a connection waits on a lock held by another process.
const BUSY_TIMEOUT_MS: usize = 5000;

/// Primary result code SQLite reports for constraint violations.
const SQLITE_CONSTRAINT: isize = 19;

/// Fresh keys tried before an insert gives up.
const KEY_ATTEMPTS: usize = 3;

/// What a single insert attempt ran into.
#[derive(Debug, PartialEq, Eq)]
enum Inserted {
    Done,
    IdTaken,
    KeyTaken,
}

struct Inner {
    connection: Connection,
    tables: HashSet<&'static str>,
}

/// SQLite-backed document store.
///
/// Clone-friendly via Arc; clones share one connection.
#[derive(Clone)]
pub struct SqliteStore {
    inner: Arc<Mutex<Inner>>,
}

impl SqliteStore {
    /// Open (creating if needed) the database file at `path` and ping it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut connection = Connection::open(path.as_ref())?;
        connection.set_busy_timeout(BUSY_TIMEOUT_MS)?;
        connection.execute("SELECT 1")?;
        debug!(path = %path.as_ref().display(), "opened sqlite store");

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                connection,
                tables: HashSet::new(),
            })),
        })
    }

    /// A private database that lives as long as this store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(":memory:")
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

impl Inner {
    /// Create the collection's table the first time this process touches it.
    fn table<D: Document>(&mut self) -> Result<String, StoreError> {
        check_collection(D::COLLECTION)?;
        let table = format!("\"{}\"", D::COLLECTION);
        if !self.tables.contains(D::COLLECTION) {
            self.connection.execute(format!(
                "CREATE TABLE IF NOT EXISTS {table} (\
                 seq INTEGER PRIMARY KEY AUTOINCREMENT, \
                 key TEXT NOT NULL UNIQUE, \
                 id TEXT NOT NULL UNIQUE, \
                 body TEXT NOT NULL)"
            ))?;
            self.tables.insert(D::COLLECTION);
        }
        Ok(table)
    }
}

fn read_stored<D: Document>(statement: &Statement<'_>) -> Result<Stored<D>, StoreError> {
    let key = statement.read::<String>(0)?;
    let body = statement.read::<String>(1)?;
    Ok(Stored {
        key: StoreKey::from_stored(key),
        data: serde_json::from_str(&body)?,
    })
}

fn exists(connection: &Connection, table: &str, id: &str) -> Result<bool, StoreError> {
    let mut statement = connection.prepare(format!("SELECT 1 FROM {table} WHERE id = ?"))?;
    statement.bind(1, id)?;
    Ok(matches!(statement.next()?, State::Row))
}

fn try_insert(
    connection: &Connection,
    table: &str,
    key: &StoreKey,
    id: &str,
    body: &str,
) -> Result<Inserted, StoreError> {
    let mut statement =
        connection.prepare(format!("INSERT INTO {table} (key, id, body) VALUES (?, ?, ?)"))?;
    statement.bind(1, key.as_str())?;
    statement.bind(2, id)?;
    statement.bind(3, body)?;

    match statement.next() {
        Ok(_) => Ok(Inserted::Done),
        Err(err) if err.code == Some(SQLITE_CONSTRAINT) => {
            let taken = match unique_column(err.message.as_deref().unwrap_or_default()) {
                Some("id") => Some(Inserted::IdTaken),
                Some("key") => Some(Inserted::KeyTaken),
                _ => None,
            };
            taken.ok_or_else(|| err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Column named by a `UNIQUE constraint failed: <table>.<column>` message.
fn unique_column(message: &str) -> Option<&str> {
    let target = message.strip_prefix("UNIQUE constraint failed: ")?;
    target.rsplit('.').next()
}

/// Run `work` inside `BEGIN IMMEDIATE`, committing on success.
fn immediate<T>(
    connection: &Connection,
    work: impl FnOnce(&Connection) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    connection.execute("BEGIN IMMEDIATE")?;
    let result = work(connection).and_then(|value| {
        connection.execute("COMMIT")?;
        Ok(value)
    });
    if result.is_err() {
        if let Err(err) = connection.execute("ROLLBACK") {
            warn!(error = %err, "rollback failed");
        }
    }
    result
}

impl DocumentStore for SqliteStore {
    fn ensure_collection<D: Document>(&self) -> Result<(), StoreError> {
        let mut inner = self.lock("ensure_collection")?;
        inner.table::<D>().map(|_| ())
    }

    fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        let mut inner = self.lock("find_by_id")?;
        let table = inner.table::<D>()?;

        let mut statement = inner
            .connection
            .prepare(format!("SELECT key, body FROM {table} WHERE id = ?"))?;
        statement.bind(1, id)?;
        match statement.next()? {
            State::Row => read_stored(&statement).map(Some),
            State::Done => Ok(None),
        }
    }

    fn find_all<D: Document>(&self) -> Result<Vec<Stored<D>>, StoreError> {
        let mut inner = self.lock("find_all")?;
        let table = inner.table::<D>()?;

        let mut statement = inner
            .connection
            .prepare(format!("SELECT key, body FROM {table} ORDER BY seq"))?;
        let mut documents = Vec::new();
        while let State::Row = statement.next()? {
            documents.push(read_stored(&statement)?);
        }
        Ok(documents)
    }

    fn insert<D: Document>(&self, document: &D) -> Result<Stored<D>, StoreError> {
        let body = serde_json::to_string(document)?;

        let mut inner = self.lock("insert")?;
        let table = inner.table::<D>()?;

        for _ in 0..KEY_ATTEMPTS {
            let key = StoreKey::generate();
            match try_insert(&inner.connection, &table, &key, document.id(), &body)? {
                Inserted::Done => {
                    debug!(collection = D::COLLECTION, id = document.id(), key = %key, "inserted document");
                    return Ok(Stored {
                        key,
                        data: document.clone(),
                    });
                }
                Inserted::IdTaken => {
                    return Err(StoreError::Duplicate {
                        collection: D::COLLECTION.to_string(),
                        id: document.id().to_string(),
                    })
                }
                Inserted::KeyTaken => warn!(key = %key, "store key already taken, retrying"),
            }
        }

        Err(StoreError::Storage(format!(
            "no free store key after {} attempts",
            KEY_ATTEMPTS
        )))
    }

    fn update_by_id<D: Document>(
        &self,
        id: &str,
        document: &D,
    ) -> Result<UpdateOutcome, StoreError> {
        check_replacement(id, document)?;
        let body = serde_json::to_string(document)?;

        let mut inner = self.lock("update_by_id")?;
        let table = inner.table::<D>()?;

        immediate(&inner.connection, |connection| {
            if !exists(connection, &table, id)? {
                return Ok(UpdateOutcome {
                    matched_count: 0,
                    modified_count: 0,
                });
            }
            let mut statement =
                connection.prepare(format!("UPDATE {table} SET body = ? WHERE id = ?"))?;
            statement.bind(1, body.as_str())?;
            statement.bind(2, id)?;
            statement.next()?;
            Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: 1,
            })
        })
    }

    fn delete_by_id<D: Document>(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        let mut inner = self.lock("delete_by_id")?;
        let table = inner.table::<D>()?;

        immediate(&inner.connection, |connection| {
            if !exists(connection, &table, id)? {
                return Ok(DeleteOutcome { deleted_count: 0 });
            }
            let mut statement = connection.prepare(format!("DELETE FROM {table} WHERE id = ?"))?;
            statement.bind(1, id)?;
            statement.next()?;
            Ok(DeleteOutcome { deleted_count: 1 })
        })
    }
}
