//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its status/priority enumerations.
//! - Keep the serde field/value spelling stable for persisted blobs.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `status` is always one of the three enumerated values.
//! - `created_at` is immutable after construction.

use crate::ident;
use crate::model::epoch_ms_now;
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// Serialized as `todo` / `in-progress` / `done` to match the persisted
/// workspace schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Done,
}

/// Task urgency tag, fixed at creation.
///
/// Serialized as `low` / `medium` / `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque stable ID used only as a collection-membership key.
    pub id: String,
    /// User-supplied title. Callers are expected to reject blank titles
    /// before submission; the model does not enforce it.
    pub title: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Urgency tag; mutable only by replacing the whole task.
    pub priority: TaskPriority,
    /// Creation time in epoch milliseconds. Serialized as `createdAt` to
    /// match the persisted schema.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates a new task with a fresh ID, `Todo` status and the current
    /// wall-clock creation time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id: ident::generate_id(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Todo,
            priority,
            created_at: epoch_ms_now(),
        }
    }
}
