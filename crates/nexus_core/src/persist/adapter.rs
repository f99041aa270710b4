//! Persistence adapter over an abstract storage medium.
//!
//! # Responsibility
//! - Own the fixed key layout (`nexus_tasks`, `nexus_notes`).
//! - Translate between in-memory collections and serialized JSON blobs.
//!
//! # Invariants
//! - A key absent from storage loads as an empty collection.
//! - Unparseable or non-array blobs load as empty collections and are
//!   reported only through the log.
//! - `clear` removes both keys entirely rather than writing empty arrays,
//!   so an untouched medium and a reset one look the same on next load.

use super::PersistResult;
use crate::model::note::Note;
use crate::model::task::Task;
use crate::storage::StorageMedium;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Storage key holding the serialized task collection.
pub const TASKS_KEY: &str = "nexus_tasks";
/// Storage key holding the serialized note collection.
pub const NOTES_KEY: &str = "nexus_notes";

/// The combined persisted state of the single implicit user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
}

/// Mirrors workspace collections to a device-local storage medium.
pub struct PersistenceAdapter<S: StorageMedium> {
    medium: S,
}

impl<S: StorageMedium> PersistenceAdapter<S> {
    pub fn new(medium: S) -> Self {
        Self { medium }
    }

    /// Reads both collections from storage.
    ///
    /// Infallible by contract: every failure mode (read error, malformed
    /// JSON, wrong shape) degrades the affected collection to empty so
    /// startup can never be interrupted by bad persisted state.
    pub fn load(&self) -> Workspace {
        Workspace {
            tasks: self.load_collection(TASKS_KEY),
            notes: self.load_collection(NOTES_KEY),
        }
    }

    /// Serializes the full task collection and overwrites its key.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> PersistResult<()> {
        self.save_collection(TASKS_KEY, tasks)
    }

    /// Serializes the full note collection and overwrites its key.
    pub fn save_notes(&mut self, notes: &[Note]) -> PersistResult<()> {
        self.save_collection(NOTES_KEY, notes)
    }

    /// Removes both keys from storage.
    ///
    /// Both removals are attempted even when the first fails; the first
    /// error (if any) is reported.
    pub fn clear(&mut self) -> PersistResult<()> {
        let tasks = self.medium.remove(TASKS_KEY);
        let notes = self.medium.remove(NOTES_KEY);
        tasks.and(notes)?;
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.medium.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=workspace_load module=persist status=error key={key} \
                     error_code=storage_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=workspace_load module=persist status=error key={key} \
                     error_code=malformed_json error={err}"
                );
                return Vec::new();
            }
        };

        if !value.is_array() {
            warn!(
                "event=workspace_load module=persist status=error key={key} \
                 error_code=not_an_array"
            );
            return Vec::new();
        }

        match serde_json::from_value(value) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=workspace_load module=persist status=error key={key} \
                     error_code=invalid_record error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&mut self, key: &str, records: &[T]) -> PersistResult<()> {
        let payload = serde_json::to_string(records)?;
        self.medium.set(key, &payload)?;
        Ok(())
    }
}
