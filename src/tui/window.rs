//! Floating windows: open/close flags, positions, stacking order and the
//! drag gesture.
//!
//! A drag session is the only thing that makes pointer-move and pointer-up
//! events matter. The registry holds at most one session. It is released on
//! pointer-up, when the dragged window closes, and on teardown, so no exit
//! path can leave a stale capture behind.

use std::collections::BTreeMap;

use crate::model::point::Point;

/// Canvas width of every floating window
pub const WINDOW_WIDTH_PX: i32 = 420;

/// The panels that live in floating windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WindowId {
    Tasks,
    Notes,
    Timer,
}

impl WindowId {
    pub const ALL: [WindowId; 3] = [WindowId::Tasks, WindowId::Notes, WindowId::Timer];

    pub fn title(self) -> &'static str {
        match self {
            WindowId::Tasks => "Tasks",
            WindowId::Notes => "Notes",
            WindowId::Timer => "Focus Timer",
        }
    }

    /// Where the window sits until the user moves it
    pub fn default_position(self) -> Point {
        match self {
            WindowId::Tasks => Point::new(24, 120),
            WindowId::Notes => Point::new(480, 140),
            WindowId::Timer => Point::new(260, 220),
        }
    }

    /// Height in terminal rows, borders included
    pub fn rows(self) -> u16 {
        match self {
            WindowId::Tasks => 14,
            WindowId::Notes => 14,
            WindowId::Timer => 8,
        }
    }
}

/// Visibility and placement of one window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub is_open: bool,
    pub position: Point,
}

/// An in-progress title-bar drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window: WindowId,
    /// Pointer position at pointer-down
    pub start: Point,
    /// Window position at pointer-down
    pub origin: Point,
}

impl DragSession {
    /// Window position for the pointer at `pointer`, floored at the edge
    pub fn position_for(&self, pointer: Point) -> Point {
        let (dx, dy) = pointer.delta_from(self.start);
        self.origin.offset(dx, dy).clamp_to_floor()
    }
}

/// All floating windows keyed by id, plus stacking order and drag state
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowState>,
    /// Back to front
    stack: Vec<WindowId>,
    drag: Option<DragSession>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Every window closed at its default position
    pub fn new() -> Self {
        let windows = WindowId::ALL
            .iter()
            .map(|&id| {
                (
                    id,
                    WindowState {
                        is_open: false,
                        position: id.default_position(),
                    },
                )
            })
            .collect();
        WindowRegistry {
            windows,
            stack: WindowId::ALL.to_vec(),
            drag: None,
        }
    }

    pub fn get(&self, id: WindowId) -> WindowState {
        self.windows.get(&id).copied().unwrap_or(WindowState {
            is_open: false,
            position: id.default_position(),
        })
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.get(id).is_open
    }

    pub fn position(&self, id: WindowId) -> Point {
        self.get(id).position
    }

    fn state_mut(&mut self, id: WindowId) -> &mut WindowState {
        self.windows.entry(id).or_insert(WindowState {
            is_open: false,
            position: id.default_position(),
        })
    }

    /// Flip the open flag; opening also raises. Returns the new flag.
    pub fn toggle(&mut self, id: WindowId) -> bool {
        if self.is_open(id) {
            self.close(id);
            false
        } else {
            self.open(id);
            true
        }
    }

    pub fn open(&mut self, id: WindowId) {
        self.state_mut(id).is_open = true;
        self.raise(id);
    }

    /// Hide the window. Its position is kept for the next open.
    pub fn close(&mut self, id: WindowId) {
        self.state_mut(id).is_open = false;
        if self.drag.is_some_and(|d| d.window == id) {
            self.drag = None;
        }
    }

    pub fn set_position(&mut self, id: WindowId, position: Point) {
        self.state_mut(id).position = position;
    }

    /// Move by a delta, with the same edge floor as dragging
    pub fn nudge(&mut self, id: WindowId, dx: i32, dy: i32) -> Point {
        let state = self.state_mut(id);
        state.position = state.position.offset(dx, dy).clamp_to_floor();
        state.position
    }

    /// Put `id` on top of the stack
    pub fn raise(&mut self, id: WindowId) {
        self.stack.retain(|&w| w != id);
        self.stack.push(id);
    }

    /// Open windows, bottom first (paint order)
    pub fn open_back_to_front(&self) -> Vec<WindowId> {
        self.stack
            .iter()
            .copied()
            .filter(|&id| self.is_open(id))
            .collect()
    }

    /// Open windows, top first (hit-test order)
    pub fn open_front_to_back(&self) -> Vec<WindowId> {
        let mut ids = self.open_back_to_front();
        ids.reverse();
        ids
    }

    pub fn topmost_open(&self) -> Option<WindowId> {
        self.open_front_to_back().first().copied()
    }

    /// Start dragging `id` from `pointer`. Closed windows cannot be dragged.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        if !self.is_open(id) {
            return false;
        }
        self.drag = Some(DragSession {
            window: id,
            start: pointer,
            origin: self.position(id),
        });
        true
    }

    /// Apply a pointer move. Returns the moved window and its new position,
    /// or `None` when no drag is in progress.
    pub fn drag_to(&mut self, pointer: Point) -> Option<(WindowId, Point)> {
        let session = self.drag?;
        let position = session.position_for(pointer);
        self.set_position(session.window, position);
        Some((session.window, position))
    }

    /// Pointer released. Returns the window that was being dragged.
    pub fn end_drag(&mut self) -> Option<WindowId> {
        self.drag.take().map(|d| d.window)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Release any pointer capture; called when the shell shuts down
    pub fn teardown(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(window = ?session.window, "drag released at teardown");
        }
    }
}
