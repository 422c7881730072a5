use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

pub(super) fn handle_notes(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let panel = &mut app.notes_panel;
    let changed = match key.code {
        KeyCode::Char('s') if ctrl => {
            app.save_notes();
            return;
        }
        KeyCode::Esc => {
            app.focus = Focus::Desktop;
            return;
        }
        KeyCode::Char(c) if !ctrl => {
            panel.insert(&mut app.notes, c);
            true
        }
        KeyCode::Enter => {
            panel.insert(&mut app.notes, '\n');
            true
        }
        KeyCode::Backspace => panel.backspace(&mut app.notes),
        KeyCode::Delete => panel.delete(&mut app.notes),
        KeyCode::Left => {
            panel.left(&app.notes);
            false
        }
        KeyCode::Right => {
            panel.right(&app.notes);
            false
        }
        KeyCode::Up => {
            panel.up(&app.notes);
            false
        }
        KeyCode::Down => {
            panel.down(&app.notes);
            false
        }
        KeyCode::Home => {
            panel.home(&app.notes);
            false
        }
        KeyCode::End => {
            panel.end(&app.notes);
            false
        }
        _ => false,
    };
    if changed {
        app.notes_edited();
    }
}

pub(super) fn paste(app: &mut App, text: &str) {
    app.notes_panel.insert_str(&mut app.notes, text);
    app.notes_edited();
}
