use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::{App, Route};
use crate::tui::window::WindowId;

use super::taskbar;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    let styles = Styles {
        key: key_style,
        desc: desc_style,
        header: header_style,
    };

    match app.route {
        Route::Landing => {
            add_section(
                &mut lines,
                "Landing",
                &[("Enter/Space/s", "Start focusing"), ("q/Esc", "Quit")],
                styles,
            );
        }
        Route::Panel => {
            let hotkeys: Vec<(String, String)> = taskbar::hotkey_legend()
                .into_iter()
                .map(|(c, label)| (c.to_string(), label.to_string()))
                .collect();
            let hotkeys: Vec<(&str, &str)> = hotkeys
                .iter()
                .map(|(k, d)| (k.as_str(), d.as_str()))
                .collect();
            add_section(&mut lines, "Taskbar", &hotkeys, styles);
            add_section(
                &mut lines,
                "Windows",
                &[
                    ("Tab", "Cycle focus between windows"),
                    ("Ctrl+\u{2190}\u{2191}\u{2193}\u{2192}", "Move focused window"),
                    ("Ctrl+W", "Close focused window"),
                    ("Esc", "Back to desktop"),
                    ("b", "Back to the landing page"),
                ],
                styles,
            );
            match app.focused_window() {
                Some(WindowId::Tasks) => add_section(
                    &mut lines,
                    "Tasks",
                    &[
                        ("Enter", "Add task / edit selected"),
                        ("\u{2191}\u{2193}/jk", "Move selection"),
                        ("Space/x", "Toggle completed"),
                        ("e", "Edit inline (Esc cancels)"),
                        ("d/Del", "Delete task"),
                        ("a/i", "Back to input"),
                    ],
                    styles,
                ),
                Some(WindowId::Notes) => add_section(
                    &mut lines,
                    "Notes",
                    &[("Ctrl+S", "Save now"), ("Arrows", "Move cursor")],
                    styles,
                ),
                Some(WindowId::Timer) => add_section(
                    &mut lines,
                    "Focus Timer",
                    &[("Space/p", "Start / pause"), ("r", "Reset to 25:00")],
                    styles,
                ),
                None => {}
            }
        }
    }

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, "?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, "q", "Quit", key_style, desc_style);
    add_binding(&mut lines, "Ctrl+C", "Quit (immediate)", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[derive(Clone, Copy)]
struct Styles {
    key: Style,
    desc: Style,
    header: Style,
}

fn add_section(lines: &mut Vec<Line<'static>>, title: &str, rows: &[(&str, &str)], styles: Styles) {
    lines.push(Line::from(Span::styled(format!(" {}", title), styles.header)));
    for (key, desc) in rows {
        add_binding(lines, key, desc, styles.key, styles.desc);
    }
    lines.push(Line::from(""));
}

fn add_binding(
    lines: &mut Vec<Line<'static>>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!(" {:<16}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
