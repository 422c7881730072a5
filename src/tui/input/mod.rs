mod desktop;
mod mouse;
mod notes;
mod tasks;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus, Route};
use super::window::WindowId;

pub use mouse::handle_mouse;

/// Columns moved per Ctrl+Left/Right on the focused window
const NUDGE_COLS: i32 = 2;

/// Handle a key event for the current route and focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status = None;

    if app.show_help {
        // Any key dismisses help
        app.show_help = false;
        return;
    }

    match app.route {
        Route::Landing => handle_landing(app, key),
        Route::Panel => match app.focused_window() {
            Some(id) => handle_window_key(app, id, key),
            None => {
                app.focus = Focus::Desktop;
                desktop::handle_desktop(app, key);
            }
        },
    }
}

/// Bracketed paste goes to whichever text field has focus
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.route != Route::Panel {
        return;
    }
    match app.focused_window() {
        Some(WindowId::Tasks) => tasks::paste(app, text),
        Some(WindowId::Notes) => notes::paste(app, text),
        _ => {}
    }
}

fn handle_landing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => app.route = Route::Panel,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

/// Keys shared by every window, then the window's own handler
fn handle_window_key(app: &mut App, id: WindowId, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        let step_x = NUDGE_COLS * i32::from(app.cell.width);
        let step_y = i32::from(app.cell.height);
        let delta = match key.code {
            KeyCode::Left => Some((-step_x, 0)),
            KeyCode::Right => Some((step_x, 0)),
            KeyCode::Up => Some((0, -step_y)),
            KeyCode::Down => Some((0, step_y)),
            _ => None,
        };
        if let Some((dx, dy)) = delta {
            app.windows.nudge(id, dx, dy);
            return;
        }
        if key.code == KeyCode::Char('w') {
            app.close_window(id);
            return;
        }
    }
    if key.code == KeyCode::Tab {
        app.cycle_focus();
        return;
    }

    match id {
        WindowId::Tasks => tasks::handle_tasks(app, key),
        WindowId::Notes => notes::handle_notes(app, key),
        WindowId::Timer => handle_timer(app, key),
    }
}

fn handle_timer(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') => {
            app.toggle_timer(Instant::now())
        }
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Esc => app.focus = Focus::Desktop,
        _ => {}
    }
}
