//! redb-based storage layer for persisted app state
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `app_state` | collection key | JSON bytes | One serialized array per collection |
//!
//! Every persisted collection lives under its own string key
//! (`SMARTDINE_MENU`, `SMARTDINE_TABLES`, ...) inside the single
//! `app_state` table, so each write touches exactly one key.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns the
//! value is on disk, and the file is always left in a consistent state.
//! A write is one open-insert-commit cycle, matching the synchronous
//! write-through contract of the state cells layered on top.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Table for app state: key = collection key, value = JSON-serialized collection
const APP_STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("app_state");

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

    #[cfg(test)]
    #[error("Writes disabled")]
    WritesDisabled,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// App state storage backed by redb
#[derive(Clone)]
pub struct StateStorage {
    db: Arc<Database>,
    /// Test switch: while set, every write fails before touching redb
    #[cfg(test)]
    writes_disabled: Arc<AtomicBool>,
}

impl StateStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table so first reads see an empty table, not an error
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APP_STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            #[cfg(test)]
            writes_disabled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APP_STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            #[cfg(test)]
            writes_disabled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Toggle forced write failure (for testing)
    #[cfg(test)]
    pub(crate) fn set_writes_disabled(&self, disabled: bool) {
        self.writes_disabled.store(disabled, Ordering::Relaxed);
    }

    /// Read the raw bytes stored under a key
    pub fn read_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APP_STATE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Write raw bytes under a key (one durable commit)
    pub fn write_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        #[cfg(test)]
        if self.writes_disabled.load(Ordering::Relaxed) {
            return Err(StorageError::WritesDisabled);
        }

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(APP_STATE_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read and deserialize the value stored under a key
    ///
    /// `Ok(None)` means the key has never been written; a present but
    /// undecodable payload is a `Serialization` error, which callers may
    /// treat as "fall back to default" (the state cells do).
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.read_bytes(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a value under a key
    pub fn write_value<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.write_bytes(key, &bytes)
    }
}
