use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Focus, Route};
use crate::tui::layout::{self, TASK_LIST_ROWS};
use crate::tui::panels::TasksFocus;
use crate::tui::window::WindowId;

use super::desktop::press_taskbar;

/// Handle a mouse event against the last drawn screen.
///
/// Left press on a title bar starts a drag; drag events move the window only
/// while that session exists; release ends it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status = None;
            match app.route {
                Route::Landing => {
                    if layout::contains(layout::landing_button(app.screen), col, row) {
                        app.route = Route::Panel;
                    }
                }
                Route::Panel => press(app, col, row),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let pointer = app.cell.to_canvas(col, row);
            app.windows.drag_to(pointer);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.windows.end_drag();
        }
        MouseEventKind::ScrollDown => scroll(app, col, row, 1),
        MouseEventKind::ScrollUp => scroll(app, col, row, -1),
        _ => {}
    }
}

/// Topmost open window under the cell, with its rectangle
fn window_at(app: &App, col: u16, row: u16) -> Option<(WindowId, ratatui::layout::Rect)> {
    let desktop = layout::desktop_area(app.screen);
    app.windows.open_front_to_back().into_iter().find_map(|id| {
        let rect = layout::window_rect(id, app.windows.position(id), app.cell, desktop)?;
        layout::contains(rect, col, row).then_some((id, rect))
    })
}

fn press(app: &mut App, col: u16, row: u16) {
    if let Some((id, rect)) = window_at(app, col, row) {
        app.focus_window(id);
        if row == rect.y {
            if layout::contains(layout::close_button(rect), col, row) {
                app.close_window(id);
            } else {
                let pointer = app.cell.to_canvas(col, row);
                app.windows.begin_drag(id, pointer);
            }
        } else {
            click_body(app, id, layout::window_body(rect), col, row);
        }
        return;
    }

    let taskbar = layout::taskbar_area(app.screen);
    if let Some((button, _)) = layout::taskbar_buttons(taskbar)
        .into_iter()
        .find(|(_, r)| layout::contains(*r, col, row))
    {
        press_taskbar(app, button);
        return;
    }

    app.focus = Focus::Desktop;
}

fn click_body(app: &mut App, id: WindowId, body: ratatui::layout::Rect, col: u16, row: u16) {
    match id {
        WindowId::Tasks => click_tasks(app, body, col, row),
        WindowId::Timer => {
            let (toggle, reset) = layout::timer_buttons(body);
            if layout::contains(toggle, col, row) {
                app.toggle_timer(Instant::now());
            } else if layout::contains(reset, col, row) {
                app.reset_timer();
            }
        }
        WindowId::Notes => {
            let save = layout::notes_save_button(body);
            if layout::contains(save, col, row) {
                app.save_notes();
            }
        }
    }
}

/// Row 0 is the input with [Add], row 1 a rule, then the list. Clicking a
/// checkbox toggles, [Save] commits the inline edit, and clicking elsewhere
/// on a row selects it.
fn click_tasks(app: &mut App, body: ratatui::layout::Rect, col: u16, row: u16) {
    if row == body.y {
        if app.tasks_panel.editing.is_some() {
            super::tasks::commit_edit(app);
        }
        app.tasks_panel.focus = TasksFocus::Input;
        if layout::contains(layout::tasks_add_button(body), col, row) {
            super::tasks::submit_input(app);
        }
        app.tasks_panel
            .clamp(app.tasks.len(), usize::from(TASK_LIST_ROWS));
        return;
    }
    let list_top = body.y + 2;
    if row < list_top || row >= list_top + TASK_LIST_ROWS {
        return;
    }
    let index = app.tasks_panel.scroll + usize::from(row - list_top);
    let Some(task) = app.tasks.get(index) else {
        return;
    };
    let id = task.id.clone();
    if app.tasks_panel.is_editing(&id) {
        if layout::contains(layout::tasks_save_button(body, row), col, row) {
            super::tasks::commit_edit(app);
        }
        return;
    }
    if app.tasks_panel.editing.is_some() {
        super::tasks::commit_edit(app);
    }
    app.tasks_panel.focus = TasksFocus::List;
    app.tasks_panel.cursor = index;
    let checkbox = col >= body.x + 1 && col < body.x + 4;
    if checkbox {
        app.toggle_task(&id);
    }
}

fn scroll(app: &mut App, col: u16, row: u16, delta: isize) {
    if app.route != Route::Panel {
        return;
    }
    if let Some((WindowId::Tasks, _)) = window_at(app, col, row) {
        let panel = &mut app.tasks_panel;
        panel.scroll = panel.scroll.saturating_add_signed(delta);
        let max = app.tasks.len().saturating_sub(usize::from(TASK_LIST_ROWS));
        panel.scroll = panel.scroll.min(max);
    }
}
