//! Durable mirroring of workspace collections.
//!
//! # Responsibility
//! - Serialize the task and note collections to their fixed storage keys.
//! - Recover gracefully from malformed or absent persisted state on load.
//!
//! # Invariants
//! - Load never raises: a bad blob degrades that collection to empty and
//!   leaves only a diagnostic log entry behind.
//! - Save overwrites the full key unconditionally; there is no diffing.

pub mod adapter;

pub use adapter::{PersistenceAdapter, Workspace, NOTES_KEY, TASKS_KEY};

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure raised by save/clear paths. Load paths never fail.
#[derive(Debug)]
pub enum PersistError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
