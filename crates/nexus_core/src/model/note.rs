//! Note domain model.

use crate::ident;
use crate::model::epoch_ms_now;
use serde::{Deserialize, Serialize};

/// Title given to every freshly created note.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Fixed display palette; one entry is picked at random per note and never
/// changes afterwards.
pub const NOTE_COLORS: [&str; 6] = [
    "#3b82f6", "#10b981", "#ef4444", "#f59e0b", "#8b5cf6", "#ec4899",
];

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque stable ID.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Last-mutation time in epoch milliseconds, refreshed on every edit.
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
    /// Hex color code drawn from [`NOTE_COLORS`] at creation.
    pub color: String,
}

impl Note {
    /// Creates a note with default title, empty content and a random
    /// palette color.
    pub fn new() -> Self {
        let color = NOTE_COLORS[ident::random_index(NOTE_COLORS.len())];
        Self {
            id: ident::generate_id(),
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            updated_at: epoch_ms_now(),
            color: color.to_string(),
        }
    }

    /// Refreshes `updated_at` to the current wall-clock time.
    pub fn touch(&mut self) {
        self.updated_at = epoch_ms_now();
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
