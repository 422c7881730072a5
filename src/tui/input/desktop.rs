use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Route};
use crate::tui::layout::TaskbarButton;

/// Keys when no window has focus: taskbar hotkeys and navigation
pub(super) fn handle_desktop(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Char('b') => app.route = Route::Landing,
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Char(c) => {
            if let Some(button) = TaskbarButton::from_hotkey(c) {
                press_taskbar(app, button);
            }
        }
        _ => {}
    }
}

/// Taskbar click or hotkey
pub(super) fn press_taskbar(app: &mut App, button: TaskbarButton) {
    match button.window() {
        Some(id) => app.toggle_window(id),
        None => app.status = Some(format!("{} is coming soon", button.label())),
    }
}
