//! redb-based record store
//!
//! One table, `collections`, maps a fixed collection key to the
//! JSON-encoded array of that collection's records. This mirrors the
//! device-local storage schema the UI shell expects: one key per entity
//! type, whole-array replacement on every write.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: a `save` that
//! returns `Ok` is on disk, and the database file is always in a
//! consistent state (copy-on-write with atomic pointer swap). There is no
//! partial success; a failed write leaves the previous array intact.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for collections: key = collection name, value = JSON-serialized record array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Record store backed by redb
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and previews)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Load a collection, or an empty array if it has never been written
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> StorageResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        match table.get(name)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Load a collection, persisting `seed` on first access so that
    /// subsequent loads are stable
    pub fn load_or_init<T>(&self, name: &str, seed: &[T]) -> StorageResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        {
            let read_txn = self.db.begin_read()?;
            let table = read_txn.open_table(COLLECTIONS_TABLE)?;
            if let Some(value) = table.get(name)? {
                return Ok(serde_json::from_slice(value.value())?);
            }
        }

        tracing::info!(collection = %name, records = seed.len(), "Seeding collection on first access");
        self.save(name, seed)?;
        Ok(seed.to_vec())
    }

    /// Atomically replace a collection's array
    pub fn save<T: Serialize>(&self, name: &str, records: &[T]) -> StorageResult<()> {
        let value = serde_json::to_vec(records)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(name, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Per-collection record counts
    pub fn stats(&self) -> StorageResult<StoreStats> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        let mut collections = Vec::new();
        for result in table.iter()? {
            let (key, value) = result?;
            let records: Vec<serde_json::Value> = serde_json::from_slice(value.value())?;
            collections.push(CollectionCount {
                name: key.value().to_string(),
                records: records.len(),
            });
        }

        Ok(StoreStats { collections })
    }
}

/// Record count for one collection
#[derive(Debug, Clone)]
pub struct CollectionCount {
    pub name: String,
    pub records: usize,
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub collections: Vec<CollectionCount>,
}
