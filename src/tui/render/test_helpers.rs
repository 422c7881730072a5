use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::store::MemoryStore;
use crate::model::{Task, UiConfig};
use crate::tui::app::{App, Route};

pub const TERM_W: u16 = 120;
pub const TERM_H: u16 = 40;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Fresh app on the landing page with an empty in-memory store
pub fn landing_app() -> App {
    App::new(Box::new(MemoryStore::new()), &UiConfig::default())
}

/// Fresh app on the panel route, no windows open
pub fn panel_app() -> App {
    landing_app().with_route(Route::Panel)
}

/// Panel app with the given tasks already loaded
pub fn panel_app_with_tasks(texts: &[(&str, bool)]) -> App {
    let mut app = panel_app();
    app.tasks = texts
        .iter()
        .enumerate()
        .map(|(i, (text, completed))| {
            let mut task = Task::with_id(format!("t{}", i), *text);
            task.completed = *completed;
            task
        })
        .collect();
    app
}

/// Draw the whole app at the default test size
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}
