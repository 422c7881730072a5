use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the task list, stored as `{id, text, completed}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, assigned at creation and never changed
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an open task with a fresh random id
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }

    /// Create a task with a known id (used when restoring or in fixtures)
    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Checkbox glyph for this task
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}
