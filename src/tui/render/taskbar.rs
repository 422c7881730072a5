use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::io::persist::PersistOutcome;
use crate::tui::app::App;
use crate::tui::layout::{self, TaskbarButton};

/// Bottom taskbar: window toggles, placeholder buttons, status on the border
pub fn render_taskbar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let status = match (&app.status, app.last_persist()) {
        (Some(msg), _) => Span::styled(format!(" {} ", msg), Style::default().fg(theme.yellow).bg(bg)),
        (None, Some(PersistOutcome::Failed { key, .. })) => Span::styled(
            format!(" could not save {} ", key),
            Style::default().fg(theme.red).bg(bg),
        ),
        _ => Span::styled(" ? help  q quit ", Style::default().fg(theme.dim).bg(bg)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg))
        .title_bottom(Line::from(status).right_aligned());
    frame.render_widget(block, area);

    for (button, rect) in layout::taskbar_buttons(area) {
        let style = match button.window() {
            Some(id) if app.windows.is_open(id) => Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default().fg(theme.text).bg(bg),
            None => Style::default().fg(theme.dim).bg(bg),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {} ", button.label()), style))),
            rect,
        );
    }
}

/// Hotkey legend for the help overlay
pub fn hotkey_legend() -> Vec<(char, &'static str)> {
    TaskbarButton::ALL
        .iter()
        .map(|b| (b.hotkey(), b.label()))
        .collect()
}
