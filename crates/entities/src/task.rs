//! Task entity definition.

use serde::{Deserialize, Serialize};

/// A tracked issue.
///
/// `id` is assigned by the store on creation. The timestamp and actor fields
/// are caller-supplied; the store persists them as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Surrogate key, `0` until the task has been persisted.
    pub id: i32,
    /// When the task was opened (epoch seconds).
    pub opened: i64,
    /// When the task was closed (epoch seconds), `0` while open.
    pub closed: i64,
    /// Actor that created the task.
    pub author_id: i32,
    /// Actor currently assigned to the task.
    pub assigned_id: i32,
    /// Short summary.
    pub title: String,
    /// Free-form body.
    pub content: String,
}

impl Task {
    /// Creates a new, unsaved task.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets the author of this task.
    pub fn with_author(mut self, author_id: i32) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets the assignee of this task.
    pub fn with_assignee(mut self, assigned_id: i32) -> Self {
        self.assigned_id = assigned_id;
        self
    }

    /// Sets the opened timestamp.
    pub fn with_opened(mut self, opened: i64) -> Self {
        self.opened = opened;
        self
    }

    /// Sets the closed timestamp.
    pub fn with_closed(mut self, closed: i64) -> Self {
        self.closed = closed;
        self
    }

    /// Returns true once a close timestamp has been recorded.
    pub fn is_closed(&self) -> bool {
        self.closed != 0
    }
}
