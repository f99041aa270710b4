//! Device-local key-value storage media.
//!
//! # Responsibility
//! - Define the string-keyed storage contract the persistence adapter
//!   writes through.
//! - Isolate medium details (SQLite, in-memory) from everything above.
//!
//! # Invariants
//! - `set` fully overwrites any previous value under the key.
//! - `remove` of an absent key succeeds; absence is not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage medium.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite-backed medium failure.
    Db(DbError),
    /// Any other medium failure (quota, I/O), reported as plain text.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed device-local storage contract.
///
/// Mutation methods take `&mut self`: the store serializes all access on a
/// single thread, so interior mutability buys nothing here.
pub trait StorageMedium {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key` entirely. Succeeds when the key was already absent.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}
