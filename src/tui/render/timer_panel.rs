use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::layout;

/// Countdown, state line and Start/Pause + Reset buttons
pub fn render_timer_panel(frame: &mut Frame, app: &App, body: Rect) {
    let theme = &app.theme;
    let bg = theme.window_bg;
    let timer = &app.timer;

    let digits: String = timer
        .label()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let time_color = if timer.is_finished() {
        theme.yellow
    } else if timer.running {
        theme.highlight
    } else {
        theme.text_bright
    };
    let state = match (timer.running, timer.is_finished()) {
        (_, true) => "Time's up",
        (true, false) => "Focusing",
        (false, false) => "Paused",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            digits,
            Style::default()
                .fg(time_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(state, Style::default().fg(theme.dim).bg(bg))).centered(),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), body);

    let (toggle, reset) = layout::timer_buttons(body);
    let (toggle, reset) = (toggle.intersection(body), reset.intersection(body));
    let toggle_label = if timer.running { "[  Pause  ]" } else { "[  Start  ]" };
    let button_style = Style::default().fg(theme.text_bright).bg(theme.selection_bg);
    if !toggle.is_empty() {
        frame.render_widget(Paragraph::new(toggle_label).style(button_style), toggle);
        frame.render_widget(Paragraph::new("[ Reset ]").style(button_style), reset);
    }

    if body.height > 5 {
        let hint = Rect::new(body.x, body.y + 5, body.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(" Space start/pause  r reset").centered())
                .style(Style::default().fg(theme.dim).bg(bg)),
            hint,
        );
    }
}
