use crate::model::task::Task;

use super::line::LineInput;

/// Which part of the tasks panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TasksFocus {
    #[default]
    Input,
    List,
}

/// Inline edit of one task. Nothing touches the task until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    pub id: String,
    pub input: LineInput,
}

/// Local UI state of the tasks panel
#[derive(Debug, Clone, Default)]
pub struct TasksPanel {
    /// The "Add a task..." field
    pub input: LineInput,
    pub focus: TasksFocus,
    /// Selected row in the list
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    pub editing: Option<TaskEdit>,
}

impl TasksPanel {
    /// Start editing `task`, seeding the field with its text
    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(TaskEdit {
            id: task.id.clone(),
            input: LineInput::with_text(&task.text),
        });
    }

    /// Drop the edit without applying it
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Finish the edit, returning `(id, text)` for the shell to apply
    pub fn finish_edit(&mut self) -> Option<(String, String)> {
        self.editing
            .take()
            .map(|edit| (edit.id, edit.input.text.trim().to_string()))
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    /// Keep cursor and scroll valid for a list of `len` rows showing
    /// `visible` at a time
    pub fn clamp(&mut self, len: usize, visible: usize) {
        if len == 0 {
            self.cursor = 0;
            self.scroll = 0;
            if self.focus == TasksFocus::List {
                self.focus = TasksFocus::Input;
            }
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        let visible = visible.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
        self.scroll = self.scroll.min(len.saturating_sub(visible));
    }
}
