use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use crate::tui::app::App;
use crate::tui::layout;
use crate::tui::window::WindowId;

use super::{notes_panel, tasks_panel, timer_panel};

/// Window chrome (traffic lights, title, close button) and its panel
pub fn render_window(frame: &mut Frame, app: &mut App, id: WindowId, rect: Rect) {
    frame.render_widget(Clear, rect);

    let theme = &app.theme;
    let bg = theme.window_bg;
    let focused = app.focused_window() == Some(id);
    let dragging = app
        .windows
        .drag_session()
        .is_some_and(|session| session.window == id);
    let border_color = if focused || dragging {
        theme.highlight
    } else {
        theme.dim
    };

    let lights = Line::from(vec![
        Span::styled(" \u{25CF}", Style::default().fg(theme.red).bg(bg)),
        Span::styled("\u{25CF}", Style::default().fg(theme.yellow).bg(bg)),
        Span::styled("\u{25CF} ", Style::default().fg(theme.green).bg(bg)),
    ]);
    let title = Line::from(Span::styled(
        format!(" {} ", id.title()),
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    let close = Line::from(Span::styled(
        "[x] ",
        Style::default().fg(theme.text).bg(bg),
    ))
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg))
        .title(lights)
        .title(title)
        .title(close);
    frame.render_widget(block, rect);

    let body = layout::window_body(rect);
    if body.width == 0 || body.height == 0 {
        return;
    }
    match id {
        WindowId::Tasks => tasks_panel::render_tasks_panel(frame, app, body, focused),
        WindowId::Notes => notes_panel::render_notes_panel(frame, app, body, focused),
        WindowId::Timer => timer_panel::render_timer_panel(frame, app, body),
    }
}
