use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::task_ops;
use crate::tui::app::App;
use crate::tui::layout::{self, TASK_LIST_ROWS};
use crate::tui::panels::{LineInput, TasksFocus};
use crate::util::unicode;

const PLACEHOLDER: &str = "Add a task...";

/// Cells reserved at the end of a row for a button and its leading space
const BUTTON_GAP: usize = 7;

/// Input row, rule, task list, hint row
pub fn render_tasks_panel(frame: &mut Frame, app: &App, body: Rect, focused: bool) {
    let theme = &app.theme;
    let bg = theme.window_bg;
    let width = body.width as usize;
    let panel = &app.tasks_panel;

    let mut lines: Vec<Line> = Vec::new();

    // Input row with [Add] on the right
    let input_active = focused && panel.focus == TasksFocus::Input && panel.editing.is_none();
    let field_width = width.saturating_sub(BUTTON_GAP + 2);
    let (field_text, field_style) = if panel.input.text.is_empty() {
        (PLACEHOLDER.to_string(), Style::default().fg(theme.dim).bg(bg))
    } else {
        (
            unicode::truncate_to_width(&panel.input.text, field_width),
            Style::default().fg(theme.text_bright).bg(bg),
        )
    };
    let pad = field_width.saturating_sub(unicode::display_width(&field_text));
    let prompt_color = if input_active { theme.highlight } else { theme.dim };
    lines.push(Line::from(vec![
        Span::styled("\u{203A} ", Style::default().fg(prompt_color).bg(bg)),
        Span::styled(field_text, field_style),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
    ]));
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(theme.dim).bg(bg),
    )));

    // Task rows
    let visible = usize::from(TASK_LIST_ROWS);
    if app.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " No tasks yet.",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    let mut edit_cursor: Option<Position> = None;
    let mut save_row: Option<u16> = None;
    for (i, task) in app.tasks.iter().enumerate().skip(panel.scroll).take(visible) {
        let selected = focused && panel.focus == TasksFocus::List && panel.cursor == i;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let box_color = if task.completed { theme.green } else { theme.text };
        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(task.checkbox(), Style::default().fg(box_color).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];
        let text_width = width.saturating_sub(5);
        match panel.editing.as_ref().filter(|e| e.id == task.id) {
            Some(edit) => {
                let edit_width = text_width.saturating_sub(BUTTON_GAP);
                spans.push(Span::styled(
                    unicode::truncate_to_width(&edit.input.text, edit_width),
                    Style::default()
                        .fg(theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                let row = body.y + 2 + (i - panel.scroll) as u16;
                save_row = Some(row);
                if focused {
                    edit_cursor = Some(cursor_at(&edit.input, body.x + 5, row, edit_width));
                }
            }
            None => {
                let style = if task.completed {
                    Style::default()
                        .fg(theme.dim)
                        .bg(row_bg)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(theme.text).bg(row_bg)
                };
                let text = unicode::truncate_to_width(&task.text, text_width);
                let pad = text_width.saturating_sub(unicode::display_width(&text));
                spans.push(Span::styled(text, style));
                spans.push(Span::styled(" ".repeat(pad + 1), Style::default().bg(row_bg)));
            }
        }
        lines.push(Line::from(spans));
    }

    // Pad the list so the hint row stays put
    let list_rows = app.tasks.len().saturating_sub(panel.scroll).min(visible).max(1);
    for _ in list_rows..visible {
        lines.push(Line::from(""));
    }

    let remaining = task_ops::remaining(&app.tasks);
    let hint = if panel.editing.is_some() {
        "Enter save  Esc cancel".to_string()
    } else if panel.focus == TasksFocus::List {
        "Space toggle  e edit  d delete".to_string()
    } else {
        format!("{} open  Enter add  \u{2193} list", remaining)
    };
    lines.push(Line::from(Span::styled(
        format!(" {}", hint),
        Style::default().fg(theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), body);

    let button_style = Style::default().fg(theme.text_bright).bg(theme.selection_bg);
    frame.render_widget(
        Paragraph::new("[Add]").style(button_style),
        layout::tasks_add_button(body),
    );
    if let Some(row) = save_row.filter(|&row| row < body.bottom()) {
        frame.render_widget(
            Paragraph::new("[Save]").style(button_style),
            layout::tasks_save_button(body, row),
        );
    }

    if let Some(pos) = edit_cursor {
        frame.set_cursor_position(pos);
    } else if input_active {
        frame.set_cursor_position(cursor_at(&panel.input, body.x + 2, body.y, field_width));
    }
}

fn cursor_at(input: &LineInput, x: u16, y: u16, max: usize) -> Position {
    let col = unicode::col_of(&input.text, input.cursor).min(max);
    Position::new(x + col as u16, y)
}
