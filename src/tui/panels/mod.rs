pub mod line;
pub mod notes;
pub mod tasks;

pub use line::LineInput;
pub use notes::NotesPanel;
pub use tasks::{TaskEdit, TasksFocus, TasksPanel};
