pub mod help_overlay;
pub mod landing;
pub mod notes_panel;
pub mod taskbar;
pub mod tasks_panel;
pub mod timer_panel;
pub mod window;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Route};
use super::layout;

/// Main render function, dispatches on the active route
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.screen = area;

    match app.route {
        Route::Landing => landing::render_landing(frame, app, area),
        Route::Panel => render_desktop(frame, app, area),
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Desktop background, open windows bottom to top, then the taskbar
fn render_desktop(frame: &mut Frame, app: &mut App, area: Rect) {
    let desktop = layout::desktop_area(area);
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.desktop)),
        desktop,
    );

    for id in app.windows.open_back_to_front() {
        let position = app.windows.position(id);
        if let Some(rect) = layout::window_rect(id, position, app.cell, desktop) {
            window::render_window(frame, app, id, rect);
        }
    }

    taskbar::render_taskbar(frame, app, layout::taskbar_area(area));
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::model::Point;
    use crate::tui::window::WindowId;

    #[test]
    fn landing_shows_hero_and_button() {
        let mut app = landing_app();
        let output = render_app(&mut app);
        assert!(output.contains("Focus Helper"));
        assert!(output.contains("Master Your Focus"));
        let button_row = output.lines().nth(9).unwrap_or_default();
        assert!(button_row.contains("[  Start Focusing  ]"));
    }

    #[test]
    fn empty_desktop_shows_only_taskbar() {
        let mut app = panel_app();
        let output = render_app(&mut app);
        assert!(output.contains("Tasks"));
        assert!(output.contains("Focus Timer"));
        assert!(output.contains("Habit Tracker"));
        assert!(output.contains("? help  q quit"));
        assert!(!output.contains("No tasks yet."));
    }

    #[test]
    fn open_tasks_window_has_chrome_and_empty_list() {
        let mut app = panel_app();
        app.toggle_window(WindowId::Tasks);
        let output = render_app(&mut app);
        let title_row = output.lines().nth(7).unwrap_or_default();
        assert!(title_row.contains(" Tasks "));
        assert!(title_row.contains("[x]"));
        assert!(output.contains("Add a task..."));
        assert!(output.contains("No tasks yet."));
    }

    #[test]
    fn task_rows_show_checkboxes() {
        let mut app = panel_app_with_tasks(&[("Write report", false), ("Stretch", true)]);
        app.toggle_window(WindowId::Tasks);
        let output = render_app(&mut app);
        assert!(output.contains("[ ] Write report"));
        assert!(output.contains("[x] Stretch"));
        assert!(!output.contains("No tasks yet."));
    }

    #[test]
    fn edited_row_shows_save_button() {
        let mut app = panel_app_with_tasks(&[("Write report", false)]);
        app.toggle_window(WindowId::Tasks);
        let task = app.tasks[0].clone();
        app.tasks_panel.begin_edit(&task);
        let output = render_app(&mut app);
        let input_row = output.lines().nth(8).unwrap_or_default();
        assert!(input_row.contains("[Add]"));
        let edit_row = output.lines().nth(10).unwrap_or_default();
        assert!(edit_row.contains("Write report"));
        assert!(edit_row.contains("[Save]"));
    }

    #[test]
    fn timer_window_shows_default_countdown() {
        let mut app = panel_app();
        app.toggle_window(WindowId::Timer);
        let output = render_app(&mut app);
        assert!(output.contains("2 5 : 0 0"));
        assert!(output.contains("Paused"));
        assert!(output.contains("[  Start  ]"));
        assert!(output.contains("[ Reset ]"));
    }

    #[test]
    fn notes_window_shows_text_and_save() {
        let mut app = panel_app();
        app.set_notes("first line\nsecond line");
        app.toggle_window(WindowId::Notes);
        let output = render_app(&mut app);
        assert!(output.contains("first line"));
        assert!(output.contains("second line"));
        assert!(output.contains("[ Save ]"));
    }

    #[test]
    fn window_follows_its_position() {
        let mut app = panel_app();
        app.toggle_window(WindowId::Timer);
        app.windows.set_position(WindowId::Timer, Point::new(8, 8));
        let output = render_app(&mut app);
        let title_row = output.lines().next().unwrap_or_default();
        assert!(title_row.contains("Focus Timer"));
    }

    #[test]
    fn placeholder_status_is_shown() {
        let mut app = panel_app();
        app.status = Some("Kanban is coming soon".into());
        let output = render_app(&mut app);
        assert!(output.contains("Kanban is coming soon"));
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut app = panel_app();
        app.show_help = true;
        let output = render_app(&mut app);
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Ctrl+W"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let mut app = panel_app();
        for id in WindowId::ALL {
            app.toggle_window(id);
        }
        let _ = render_to_string(20, 6, |frame, _| super::render(frame, &mut app));
        let mut landing = landing_app();
        let _ = render_to_string(10, 3, |frame, _| super::render(frame, &mut landing));
    }
}
