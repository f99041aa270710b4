//! Workspace state container.
//!
//! # Responsibility
//! - Own the canonical ordered task and note collections.
//! - Apply every mutation and mirror the touched collection to storage.
//! - Hand out read-only snapshots for rendering.
//!
//! # Invariants
//! - Collections are newest-first; `add_*` prepends.
//! - Mutations referencing an unknown id are silent no-ops.
//! - Persistence failures never escape a mutation; in-memory state is
//!   already updated and the process stays interactive.
//! - Load happens exactly once, in [`Store::load`]; no save path exists
//!   before a `Store` value does.

use crate::model::note::Note;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::persist::{PersistenceAdapter, Workspace};
use crate::storage::StorageMedium;
use log::{debug, error, info};
use serde::Serialize;

/// Per-status task tally for dashboard-style read models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Single-threaded state container; the sole writer of persisted state.
pub struct Store<S: StorageMedium> {
    tasks: Vec<Task>,
    notes: Vec<Note>,
    adapter: PersistenceAdapter<S>,
}

impl<S: StorageMedium> Store<S> {
    /// Performs the one-time load and constructs the store around the
    /// resulting workspace.
    pub fn load(adapter: PersistenceAdapter<S>) -> Self {
        let Workspace { tasks, notes } = adapter.load();
        info!(
            "event=workspace_load module=store status=ok tasks={} notes={}",
            tasks.len(),
            notes.len()
        );
        Self {
            tasks,
            notes,
            adapter,
        }
    }

    /// Read-only snapshot of the task collection, newest-first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Read-only snapshot of the note collection, newest-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Creates a task with `Todo` status and prepends it.
    ///
    /// Title validation is the caller's concern; the store accepts any
    /// input and always succeeds.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> &Task {
        let task = Task::new(title, description, priority);
        self.tasks.insert(0, task);
        self.mirror_tasks();
        &self.tasks[0]
    }

    /// Replaces the status of the task with `id`; all other fields keep
    /// their values. Unknown ids are silent no-ops.
    pub fn update_task_status(&mut self, id: &str, status: TaskStatus) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_update module=store status=noop reason=unknown_id");
            return;
        };
        task.status = status;
        self.mirror_tasks();
    }

    /// Removes the task with `id`. Unknown ids are silent no-ops.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=store status=noop reason=unknown_id");
            return;
        }
        self.mirror_tasks();
    }

    /// Creates a note with default title, empty content and a random
    /// palette color, and prepends it.
    pub fn add_note(&mut self) -> &Note {
        self.notes.insert(0, Note::new());
        self.mirror_notes();
        &self.notes[0]
    }

    /// Replaces title and content of the note with `id` and refreshes its
    /// `updated_at`. Unknown ids are silent no-ops.
    pub fn update_note(&mut self, id: &str, title: impl Into<String>, content: impl Into<String>) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=store status=noop reason=unknown_id");
            return;
        };
        note.title = title.into();
        note.content = content.into();
        note.touch();
        self.mirror_notes();
    }

    /// Removes the note with `id`. Unknown ids are silent no-ops.
    pub fn delete_note(&mut self, id: &str) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=store status=noop reason=unknown_id");
            return;
        }
        self.mirror_notes();
    }

    /// Empties both collections and removes both storage keys.
    ///
    /// Unconditional; any confirmation dialog belongs to the view layer.
    pub fn reset_workspace(&mut self) {
        self.tasks.clear();
        self.notes.clear();
        match self.adapter.clear() {
            Ok(()) => info!("event=workspace_reset module=store status=ok"),
            Err(err) => error!("event=workspace_reset module=store status=error error={err}"),
        }
    }

    /// Approximate serialized size of the workspace in bytes.
    ///
    /// Informational only; a collection that fails to serialize counts as
    /// zero bytes.
    pub fn estimated_storage_bytes(&self) -> usize {
        serialized_len(&self.tasks) + serialized_len(&self.notes)
    }

    /// Tallies tasks per status for dashboard rendering.
    pub fn task_status_counts(&self) -> TaskStatusCounts {
        let mut counts = TaskStatusCounts::default();
        for task in &self.tasks {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }

    fn mirror_tasks(&mut self) {
        if let Err(err) = self.adapter.save_tasks(&self.tasks) {
            error!(
                "event=workspace_save module=store status=error collection=tasks error={err}"
            );
        }
    }

    fn mirror_notes(&mut self) {
        if let Err(err) = self.adapter.save_notes(&self.notes) {
            error!(
                "event=workspace_save module=store status=error collection=notes error={err}"
            );
        }
    }
}

fn serialized_len<T: Serialize>(records: &[T]) -> usize {
    serde_json::to_string(records).map_or(0, |payload| payload.len())
}
