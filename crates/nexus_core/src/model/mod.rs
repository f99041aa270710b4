//! Workspace domain model.
//!
//! # Responsibility
//! - Define the canonical `Task` and `Note` records and their enumerations.
//! - Own the serialization contract for persisted workspace state.
//!
//! # Invariants
//! - Persisted and in-memory shapes are structurally identical; no derived
//!   or cached fields exist on either record.
//! - `id` values are opaque strings, unique within a collection, and never
//!   change after creation.

pub mod note;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in unix epoch milliseconds.
///
/// A clock set before the unix epoch collapses to `0` rather than failing;
/// timestamps are display metadata, not a correctness boundary.
pub(crate) fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
