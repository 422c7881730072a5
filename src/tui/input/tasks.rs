use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::tui::layout::TASK_LIST_ROWS;
use crate::tui::panels::{LineInput, TasksFocus};

pub(super) fn handle_tasks(app: &mut App, key: KeyEvent) {
    if app.tasks_panel.editing.is_some() {
        handle_edit(app, key);
    } else {
        match app.tasks_panel.focus {
            TasksFocus::Input => handle_input(app, key),
            TasksFocus::List => handle_list(app, key),
        }
    }
    app.tasks_panel
        .clamp(app.tasks.len(), usize::from(TASK_LIST_ROWS));
}

/// Shared single-line editing keys. Returns false if the key was not used.
fn edit_line(input: &mut LineInput, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

/// Enter commits, Esc discards
fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => commit_edit(app),
        KeyCode::Esc => app.tasks_panel.cancel_edit(),
        _ => {
            if let Some(edit) = app.tasks_panel.editing.as_mut() {
                edit_line(&mut edit.input, key);
            }
        }
    }
}

/// Apply the inline edit. Blank text leaves the task as it was.
pub(super) fn commit_edit(app: &mut App) {
    if let Some((id, text)) = app.tasks_panel.finish_edit() {
        app.edit_task(&id, &text);
    }
}

/// Enter or the [Add] button: add the input as a task and clear it.
/// Blank input stays where it is.
pub(super) fn submit_input(app: &mut App) {
    if !app.tasks_panel.input.is_blank() {
        let text = app.tasks_panel.input.take();
        app.add_task(&text);
    }
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_input(app),
        KeyCode::Down if !app.tasks.is_empty() => {
            app.tasks_panel.focus = TasksFocus::List;
            app.tasks_panel.cursor = 0;
        }
        KeyCode::Esc => app.focus = Focus::Desktop,
        _ => {
            edit_line(&mut app.tasks_panel.input, key);
        }
    }
}

fn handle_list(app: &mut App, key: KeyEvent) {
    let panel = &mut app.tasks_panel;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if panel.cursor == 0 {
                panel.focus = TasksFocus::Input;
            } else {
                panel.cursor -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => panel.cursor += 1,
        KeyCode::Char('a') | KeyCode::Char('i') => panel.focus = TasksFocus::Input,
        KeyCode::Esc => app.focus = Focus::Desktop,
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_task_id() {
                app.toggle_task(&id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(task) = app.tasks.get(app.tasks_panel.cursor).cloned() {
                app.tasks_panel.begin_edit(&task);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                app.delete_task(&id);
            }
        }
        _ => {}
    }
}

pub(super) fn paste(app: &mut App, text: &str) {
    let panel = &mut app.tasks_panel;
    match panel.editing.as_mut() {
        Some(edit) => edit.input.insert_str(text),
        None => {
            panel.focus = TasksFocus::Input;
            panel.input.insert_str(text);
        }
    }
}
