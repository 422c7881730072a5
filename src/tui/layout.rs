//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Position, Rect};

use crate::model::config::UiConfig;
use crate::model::point::Point;

use super::window::{WINDOW_WIDTH_PX, WindowId};

/// Rows taken by the taskbar at the bottom of the desktop
pub const TASKBAR_ROWS: u16 = 3;

/// Rows in the task list viewport
pub const TASK_LIST_ROWS: u16 = 9;

/// Canvas pixels per terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        CellSize {
            width: 8,
            height: 16,
        }
    }
}

impl CellSize {
    pub fn from_config(ui: &UiConfig) -> Self {
        CellSize {
            width: ui.cell_width.max(1),
            height: ui.cell_height.max(1),
        }
    }

    /// Canvas point at the top-left of terminal cell (col, row)
    pub fn to_canvas(self, col: u16, row: u16) -> Point {
        Point::new(
            i32::from(col) * i32::from(self.width),
            i32::from(row) * i32::from(self.height),
        )
    }

    /// Terminal cell containing canvas point `p`
    pub fn to_cell(self, p: Point) -> (i32, i32) {
        (
            p.x.div_euclid(i32::from(self.width)),
            p.y.div_euclid(i32::from(self.height)),
        )
    }

    pub fn window_cols(self) -> u16 {
        let cols = WINDOW_WIDTH_PX / i32::from(self.width);
        cols.clamp(12, i32::from(u16::MAX)) as u16
    }
}

/// Desktop area above the taskbar
pub fn desktop_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(TASKBAR_ROWS),
        ..area
    }
}

pub fn taskbar_area(area: Rect) -> Rect {
    let rows = TASKBAR_ROWS.min(area.height);
    Rect::new(area.x, area.y + area.height - rows, area.width, rows)
}

/// On-screen rectangle of a window at `position`, clipped to `desktop`.
/// `None` when nothing of it is visible.
pub fn window_rect(id: WindowId, position: Point, cell: CellSize, desktop: Rect) -> Option<Rect> {
    let (col, row) = cell.to_cell(position);
    let left = i64::from(desktop.x) + i64::from(col);
    let top = i64::from(desktop.y) + i64::from(row);
    let right = left + i64::from(cell.window_cols());
    let bottom = top + i64::from(id.rows());

    let clip_left = left.max(i64::from(desktop.x));
    let clip_top = top.max(i64::from(desktop.y));
    let clip_right = right.min(i64::from(desktop.right()));
    let clip_bottom = bottom.min(i64::from(desktop.bottom()));
    if clip_left >= clip_right || clip_top >= clip_bottom {
        return None;
    }
    Some(Rect::new(
        clip_left as u16,
        clip_top as u16,
        (clip_right - clip_left) as u16,
        (clip_bottom - clip_top) as u16,
    ))
}

/// The `[x]` close button in a window's title row
pub fn close_button(rect: Rect) -> Rect {
    let x = rect.right().saturating_sub(5).max(rect.x);
    Rect::new(x, rect.y, 3.min(rect.width), 1)
}

/// Area inside a window's border
pub fn window_body(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    rect.contains(Position::new(col, row))
}

/// Buttons along the taskbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarButton {
    Tasks,
    Kanban,
    Habits,
    Timer,
    Notes,
    Sounds,
    Settings,
}

impl TaskbarButton {
    pub const ALL: [TaskbarButton; 7] = [
        TaskbarButton::Tasks,
        TaskbarButton::Kanban,
        TaskbarButton::Habits,
        TaskbarButton::Timer,
        TaskbarButton::Notes,
        TaskbarButton::Sounds,
        TaskbarButton::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskbarButton::Tasks => "Tasks",
            TaskbarButton::Kanban => "Kanban",
            TaskbarButton::Habits => "Habit Tracker",
            TaskbarButton::Timer => "Focus Timer",
            TaskbarButton::Notes => "Notes",
            TaskbarButton::Sounds => "Ambient Sounds",
            TaskbarButton::Settings => "Settings",
        }
    }

    /// The window this button toggles; `None` for the placeholders
    pub fn window(self) -> Option<WindowId> {
        match self {
            TaskbarButton::Tasks => Some(WindowId::Tasks),
            TaskbarButton::Timer => Some(WindowId::Timer),
            TaskbarButton::Notes => Some(WindowId::Notes),
            _ => None,
        }
    }

    /// Keyboard shortcut on the desktop
    pub fn hotkey(self) -> char {
        match self {
            TaskbarButton::Tasks => 't',
            TaskbarButton::Kanban => 'k',
            TaskbarButton::Habits => 'h',
            TaskbarButton::Timer => 'f',
            TaskbarButton::Notes => 'n',
            TaskbarButton::Sounds => 'a',
            TaskbarButton::Settings => 's',
        }
    }

    pub fn from_hotkey(c: char) -> Option<TaskbarButton> {
        Self::ALL.into_iter().find(|b| b.hotkey() == c)
    }
}

/// Button rectangles inside the taskbar row, left to right. Buttons that do
/// not fit are dropped.
pub fn taskbar_buttons(taskbar: Rect) -> Vec<(TaskbarButton, Rect)> {
    let row = taskbar.y + taskbar.height.saturating_sub(1) / 2;
    let mut x = taskbar.x.saturating_add(2);
    let end = taskbar.right().saturating_sub(1);
    let mut out = Vec::new();
    for button in TaskbarButton::ALL {
        let width = button.label().len() as u16 + 2;
        if x.saturating_add(width) > end {
            break;
        }
        out.push((button, Rect::new(x, row, width, 1)));
        x += width + 1;
    }
    out
}

/// "Start Focusing" button on the landing page
pub fn landing_button(area: Rect) -> Rect {
    let width = 20.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + 9.min(area.height.saturating_sub(1));
    Rect::new(x, y, width, 1)
}

/// Timer panel buttons: (start/pause, reset)
pub fn timer_buttons(body: Rect) -> (Rect, Rect) {
    let y = body.y + 4.min(body.height.saturating_sub(1));
    let total = 21u16;
    let x = body.x + body.width.saturating_sub(total) / 2;
    (Rect::new(x, y, 11, 1), Rect::new(x + 12, y, 9, 1))
}

/// Tasks panel "[Add]" button at the right end of the input row
pub fn tasks_add_button(body: Rect) -> Rect {
    let width = 5.min(body.width);
    Rect::new(body.right().saturating_sub(width), body.y, width, 1)
}

/// Tasks panel "[Save]" button at the right end of the row being edited
pub fn tasks_save_button(body: Rect, row: u16) -> Rect {
    let width = 6.min(body.width);
    Rect::new(body.right().saturating_sub(width), row, width, 1)
}

/// Notes panel "[ Save ]" button, bottom-right of the body
pub fn notes_save_button(body: Rect) -> Rect {
    let width = 8.min(body.width);
    Rect::new(
        body.right().saturating_sub(width),
        body.bottom().saturating_sub(1),
        width,
        1,
    )
}
