use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::layout;
use crate::util::unicode;

const PLACEHOLDER: &str = "Write your notes...";

/// Text area filling the body, footer row with the Save button
pub fn render_notes_panel(frame: &mut Frame, app: &mut App, body: Rect, focused: bool) {
    let text_rows = usize::from(body.height.saturating_sub(1));
    let width = body.width as usize;
    app.notes_panel.clamp(&app.notes);
    app.notes_panel.scroll_to_cursor(&app.notes, text_rows);

    let theme = &app.theme;
    let bg = theme.window_bg;
    let text_style = Style::default().fg(theme.text_bright).bg(bg);

    let mut lines: Vec<Line> = if app.notes.is_empty() {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.dim).bg(bg),
        ))]
    } else {
        app.notes
            .split('\n')
            .skip(app.notes_panel.scroll)
            .take(text_rows)
            .map(|l| Line::from(Span::styled(unicode::truncate_to_width(l, width), text_style)))
            .collect()
    };
    while lines.len() < text_rows {
        lines.push(Line::from(""));
    }

    let save = layout::notes_save_button(body);
    let hint = " Ctrl+S save";
    let pad = width.saturating_sub(hint.len() + usize::from(save.width));
    lines.push(Line::from(vec![
        Span::styled(hint, Style::default().fg(theme.dim).bg(bg)),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(
            "[ Save ]",
            Style::default().fg(theme.text).bg(theme.selection_bg),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), body);

    if focused {
        let (line, col) = app.notes_panel.position(&app.notes);
        let row = line.saturating_sub(app.notes_panel.scroll);
        let col = col.min(width.saturating_sub(1));
        frame.set_cursor_position(Position::new(body.x + col as u16, body.y + row as u16));
    }
}
