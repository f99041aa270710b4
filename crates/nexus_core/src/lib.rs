//! State management and persistence core for the Nexus workspace.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod ident;
pub mod logging;
pub mod model;
pub mod persist;
pub mod storage;
pub mod store;

pub use ident::generate_id;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, DEFAULT_NOTE_TITLE, NOTE_COLORS};
pub use model::task::{Task, TaskPriority, TaskStatus};
pub use persist::{
    PersistError, PersistResult, PersistenceAdapter, Workspace, NOTES_KEY, TASKS_KEY,
};
pub use storage::{MemoryStorage, SqliteStorage, StorageError, StorageMedium, StorageResult};
pub use store::{Store, TaskStatusCounts};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
