use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::App;
use crate::tui::layout;

/// Feature cards: (title, blurb, stat)
const FEATURES: [(&str, &str, &str); 6] = [
    (
        "Deep Focus Mode",
        "Block distractions and enter a state of deep concentration.",
        "4.2hrs avg",
    ),
    (
        "Smart Pomodoro",
        "Adaptive timing based on your work patterns and energy.",
        "25 min",
    ),
    (
        "Goal Tracking",
        "Set and achieve your daily focus goals.",
        "89% goals met",
    ),
    (
        "Instant Activation",
        "One-click focus mode that optimizes your environment.",
        "50+ apps",
    ),
    (
        "Distraction Shield",
        "Learns your distraction patterns and keeps them away.",
        "24/7",
    ),
    (
        "Focus Analytics",
        "Insights into your focus patterns and peak hours.",
        "10M+ data points",
    ),
];

const BENEFITS: [&str; 4] = [
    "3x Productivity Boost",
    "Save 2+ Hours Daily",
    "Trusted by professionals, students and teams",
    "Rated the best focus app by our users",
];

/// The marketing page. Everything here is decoration except the button.
pub fn render_landing(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let bright = Style::default().fg(theme.text_bright).bg(bg);
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let accent = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let nav_right = "Features  Preview ";
    let brand = " Focus Helper";
    let gap = (area.width as usize).saturating_sub(brand.len() + nav_right.len());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(brand, bright.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(gap), Style::default().bg(bg)),
            Span::styled(nav_right, dim),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("Master Your ", bright.add_modifier(Modifier::BOLD)),
            Span::styled("Focus", accent),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Transform your productivity with AI-powered focus techniques and",
            text,
        ))
        .centered(),
        Line::from(Span::styled("distraction blocking", text)).centered(),
        Line::from(""),
        Line::from(""),
    ];
    // Row 9 is the button; keep in step with layout::landing_button
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Powerful Focus Features", bright)).centered());
    lines.push(Line::from(""));
    for (title, blurb, stat) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("  \u{25C6} {:<20}", title), accent),
            Span::styled(format!("{:<62}", blurb), text),
            Span::styled(stat, dim),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Why Choose Focus Helper?", bright)).centered());
    for benefit in BENEFITS {
        lines.push(Line::from(Span::styled(format!("\u{2713} {}", benefit), text)).centered());
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Ready to Master Your Focus?", bright)).centered());

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    let button = layout::landing_button(area);
    frame.render_widget(
        Paragraph::new(Line::from("[  Start Focusing  ]").centered()).style(
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );

    if area.height > 1 {
        let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(" Enter start  ? help  q quit").left_aligned()).style(dim),
            footer,
        );
    }
}
