use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::persist::{self, NOTES_KEY, PersistOutcome, TASKS_KEY};
use crate::io::store::Store;
use crate::model::{Task, UiConfig};
use crate::ops::task_ops;

use super::input;
use super::layout::CellSize;
use super::panels::{NotesPanel, TasksFocus, TasksPanel};
use super::render;
use super::theme::Theme;
use super::timer::{Ticker, Timer};
use super::window::{WindowId, WindowRegistry};

/// Longest the event loop sleeps when nothing is due
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Marketing page with the "Start Focusing" button
    Landing,
    /// Desktop with taskbar and floating windows
    Panel,
}

/// What receives keyboard input on the panel route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Desktop,
    Window(WindowId),
}

/// Main application state. Owns the canonical tasks and notes and mirrors
/// them to the store after every change.
pub struct App {
    pub route: Route,
    pub focus: Focus,
    pub windows: WindowRegistry,
    pub tasks: Vec<Task>,
    pub notes: String,
    pub tasks_panel: TasksPanel,
    pub notes_panel: NotesPanel,
    pub timer: Timer,
    pub ticker: Ticker,
    pub theme: Theme,
    pub cell: CellSize,
    pub show_help: bool,
    /// Screen area of the last draw, used for mouse hit-testing
    pub screen: Rect,
    /// One-shot message shown in the taskbar
    pub status: Option<String>,
    pub should_quit: bool,
    store: Box<dyn Store>,
    tasks_dirty: bool,
    notes_dirty: bool,
    last_persist: Option<PersistOutcome>,
}

impl App {
    /// Build the shell and restore tasks and notes from `store`
    pub fn new(store: Box<dyn Store>, ui: &UiConfig) -> Self {
        let snapshot = persist::load_snapshot(store.as_ref());
        tracing::info!(
            tasks = snapshot.tasks.len(),
            notes_len = snapshot.notes.len(),
            "restored state"
        );
        App {
            route: Route::Landing,
            focus: Focus::Desktop,
            windows: WindowRegistry::new(),
            tasks: snapshot.tasks,
            notes: snapshot.notes,
            tasks_panel: TasksPanel::default(),
            notes_panel: NotesPanel::default(),
            timer: Timer::default(),
            ticker: Ticker::new(),
            theme: Theme::from_config(ui),
            cell: CellSize::from_config(ui),
            show_help: false,
            screen: Rect::default(),
            status: None,
            should_quit: false,
            store,
            tasks_dirty: false,
            notes_dirty: false,
            last_persist: None,
        }
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Outcome of the most recent write-back, if any happened
    pub fn last_persist(&self) -> Option<&PersistOutcome> {
        self.last_persist.as_ref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.tasks_dirty || self.notes_dirty
    }

    // --- Tasks ---

    pub fn add_task(&mut self, text: &str) -> bool {
        let added = task_ops::add_task(&mut self.tasks, text).is_some();
        self.tasks_dirty |= added;
        added
    }

    pub fn toggle_task(&mut self, id: &str) -> bool {
        let changed = task_ops::toggle_task(&mut self.tasks, id);
        self.tasks_dirty |= changed;
        changed
    }

    pub fn edit_task(&mut self, id: &str, text: &str) -> bool {
        let changed = task_ops::edit_task(&mut self.tasks, id, text);
        self.tasks_dirty |= changed;
        changed
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let changed = task_ops::delete_task(&mut self.tasks, id);
        if changed && self.tasks_panel.is_editing(id) {
            self.tasks_panel.cancel_edit();
        }
        self.tasks_dirty |= changed;
        changed
    }

    /// Id of the task under the list cursor
    pub fn selected_task_id(&self) -> Option<String> {
        if self.tasks_panel.focus != TasksFocus::List {
            return None;
        }
        self.tasks
            .get(self.tasks_panel.cursor)
            .map(|t| t.id.clone())
    }

    // --- Notes ---

    /// Replace the note wholesale
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        if notes != self.notes {
            self.notes = notes;
            self.notes_dirty = true;
            self.notes_panel.clamp(&self.notes);
        }
    }

    /// Record an in-place edit of `self.notes`
    pub fn notes_edited(&mut self) {
        self.notes_dirty = true;
    }

    /// The Save button. Autosave already covers every edit, so this only
    /// forces pending writes out now.
    pub fn save_notes(&mut self) {
        self.flush();
        self.status = Some(match &self.last_persist {
            Some(PersistOutcome::Failed { .. }) => "Could not save notes".to_string(),
            _ => "Notes saved".to_string(),
        });
    }

    // --- Windows ---

    /// Taskbar toggle: opening raises and focuses the window, closing goes
    /// through [`App::close_window`]
    pub fn toggle_window(&mut self, id: WindowId) {
        if self.windows.toggle(id) {
            self.focus = Focus::Window(id);
        } else {
            self.close_window(id);
        }
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
        if id == WindowId::Tasks {
            self.tasks_panel.cancel_edit();
        }
        if self.focus == Focus::Window(id) {
            self.focus = self
                .windows
                .topmost_open()
                .map_or(Focus::Desktop, Focus::Window);
        }
    }

    pub fn focus_window(&mut self, id: WindowId) {
        if self.windows.is_open(id) {
            self.windows.raise(id);
            self.focus = Focus::Window(id);
        }
    }

    /// Move focus to the next open window, wrapping through the desktop
    pub fn cycle_focus(&mut self) {
        let open: Vec<WindowId> = WindowId::ALL
            .into_iter()
            .filter(|&id| self.windows.is_open(id))
            .collect();
        let next = match self.focus {
            Focus::Desktop => open.first().copied(),
            Focus::Window(current) => open
                .iter()
                .position(|&id| id == current)
                .and_then(|i| open.get(i + 1))
                .copied(),
        };
        match next {
            Some(id) => self.focus_window(id),
            None => self.focus = Focus::Desktop,
        }
    }

    pub fn focused_window(&self) -> Option<WindowId> {
        match self.focus {
            Focus::Window(id) if self.windows.is_open(id) => Some(id),
            _ => None,
        }
    }

    // --- Timer ---

    pub fn toggle_timer(&mut self, now: Instant) {
        self.timer.toggle();
        if self.timer.running {
            self.ticker.rearm(&self.timer, now);
        } else {
            self.ticker.cancel();
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.ticker.cancel();
    }

    /// Apply timer ticks due by `now`
    pub fn on_tick(&mut self, now: Instant) -> u32 {
        let fired = self.ticker.fire(&mut self.timer, now);
        if fired > 0 && self.timer.is_finished() {
            tracing::info!("focus timer reached 00:00");
        }
        fired
    }

    // --- Persistence ---

    /// Write every changed value back to the store. Failures are logged and
    /// remembered, never returned.
    pub fn flush(&mut self) {
        if self.tasks_dirty {
            self.tasks_dirty = false;
            let result = persist::save_tasks(self.store.as_mut(), &self.tasks);
            self.record(TASKS_KEY, result);
        }
        if self.notes_dirty {
            self.notes_dirty = false;
            let result = persist::save_notes(self.store.as_mut(), &self.notes);
            self.record(NOTES_KEY, result);
        }
    }

    fn record(&mut self, key: &'static str, result: Result<(), persist::PersistError>) {
        self.last_persist = Some(match result {
            Ok(()) => {
                tracing::debug!(key, "saved");
                PersistOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "write-back failed");
                PersistOutcome::Failed {
                    key,
                    reason: e.to_string(),
                }
            }
        });
    }

    /// Release every transient resource and write out pending changes
    pub fn shutdown(&mut self) {
        self.windows.teardown();
        self.ticker.cancel();
        self.flush();
    }
}

/// Raw mode, alternate screen and mouse capture, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

/// Run the TUI until the user quits
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let guard = TerminalGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    // Restore the terminal before the panic message prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    app.shutdown();
    drop(guard);
    terminal.show_cursor()?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let timeout = app.ticker.timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }
        app.on_tick(Instant::now());
        app.flush();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::persist::load_snapshot;
    use crate::io::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn app_with(store: MemoryStore) -> App {
        App::new(Box::new(store), &UiConfig::default())
    }

    #[test]
    fn restores_persisted_state() {
        let app = app_with(
            MemoryStore::new()
                .with_entry(TASKS_KEY, r#"[{"id":"1","text":"buy milk","completed":false}]"#)
                .with_entry(NOTES_KEY, "draft"),
        );
        assert_eq!(app.tasks, vec![Task::with_id("1", "buy milk")]);
        assert_eq!(app.notes, "draft");
        assert_eq!(app.route, Route::Landing);
    }

    #[test]
    fn corrupt_tasks_start_empty() {
        let app = app_with(MemoryStore::new().with_entry(TASKS_KEY, "{{{"));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn changes_are_written_back_on_flush() {
        let mut app = app_with(MemoryStore::new());
        assert!(app.add_task("write report"));
        app.set_notes("remember the milk");
        assert!(app.has_unsaved_changes());
        app.flush();

        assert!(!app.has_unsaved_changes());
        assert_eq!(app.last_persist(), Some(&PersistOutcome::Saved));
        let snap = load_snapshot(app.store());
        assert_eq!(snap.tasks, app.tasks);
        assert_eq!(snap.notes, "remember the milk");
    }

    #[test]
    fn noop_operations_do_not_write() {
        let mut app = app_with(MemoryStore::new());
        assert!(!app.add_task("   "));
        assert!(!app.toggle_task("missing"));
        app.set_notes("");
        app.flush();
        assert_eq!(app.last_persist(), None);
        assert_eq!(app.store().get(TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn write_failure_is_recorded_and_state_kept() {
        let mut app = app_with(MemoryStore::new().failing_writes());
        app.add_task("keep me");
        app.flush();
        assert!(matches!(
            app.last_persist(),
            Some(PersistOutcome::Failed { key: TASKS_KEY, .. })
        ));
        assert_eq!(app.tasks.len(), 1);
        assert!(!app.has_unsaved_changes());
    }

    #[test]
    fn save_notes_reports_outcome() {
        let mut app = app_with(MemoryStore::new());
        app.set_notes("x");
        app.save_notes();
        assert_eq!(app.status.as_deref(), Some("Notes saved"));

        let mut app = app_with(MemoryStore::new().failing_writes());
        app.set_notes("x");
        app.save_notes();
        assert_eq!(app.status.as_deref(), Some("Could not save notes"));
    }

    #[test]
    fn window_positions_are_not_persisted() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Tasks);
        app.windows.nudge(WindowId::Tasks, 80, 80);
        app.add_task("x");
        app.shutdown();

        let store = std::mem::replace(&mut app.store, Box::new(MemoryStore::new()));
        let reloaded = App::new(store, &UiConfig::default());
        assert_eq!(
            reloaded.windows.position(WindowId::Tasks),
            WindowId::Tasks.default_position()
        );
        assert!(!reloaded.windows.is_open(WindowId::Tasks));
        assert_eq!(reloaded.tasks.len(), 1);
    }

    #[test]
    fn toggle_window_moves_focus() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Notes);
        assert_eq!(app.focus, Focus::Window(WindowId::Notes));
        app.toggle_window(WindowId::Notes);
        assert_eq!(app.focus, Focus::Desktop);
    }

    #[test]
    fn taskbar_close_drops_inline_edit_and_keeps_focus_on_desktop_windows() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Notes);
        app.toggle_window(WindowId::Tasks);
        app.add_task("draft");
        let task = app.tasks[0].clone();
        app.tasks_panel.begin_edit(&task);

        app.toggle_window(WindowId::Tasks);
        assert!(app.tasks_panel.editing.is_none());
        assert_eq!(app.focus, Focus::Window(WindowId::Notes));

        app.toggle_window(WindowId::Tasks);
        assert!(app.tasks_panel.editing.is_none());
        assert_eq!(app.tasks[0].text, "draft");
    }

    #[test]
    fn taskbar_close_releases_drag() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Timer);
        app.windows
            .begin_drag(WindowId::Timer, crate::model::Point::new(0, 0));
        app.toggle_window(WindowId::Timer);
        assert!(!app.windows.is_dragging());
        assert_eq!(app.focus, Focus::Desktop);
    }

    #[test]
    fn closing_focused_window_focuses_next_topmost() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Tasks);
        app.toggle_window(WindowId::Timer);
        app.close_window(WindowId::Timer);
        assert_eq!(app.focus, Focus::Window(WindowId::Tasks));
        app.close_window(WindowId::Tasks);
        assert_eq!(app.focus, Focus::Desktop);
    }

    #[test]
    fn cycle_focus_wraps_through_desktop() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Tasks);
        app.toggle_window(WindowId::Timer);
        app.focus = Focus::Desktop;
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Window(WindowId::Tasks));
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Window(WindowId::Timer));
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Desktop);
    }

    #[test]
    fn deleting_edited_task_drops_edit() {
        let mut app = app_with(MemoryStore::new());
        app.add_task("a");
        let task = app.tasks[0].clone();
        app.tasks_panel.begin_edit(&task);
        app.delete_task(&task.id);
        assert!(app.tasks_panel.editing.is_none());
    }

    #[test]
    fn timer_runs_only_when_toggled() {
        let start = Instant::now();
        let mut app = app_with(MemoryStore::new());
        assert_eq!(app.on_tick(start + Duration::from_secs(5)), 0);

        app.toggle_timer(start);
        assert_eq!(app.on_tick(start + Duration::from_secs(2)), 2);
        assert_eq!(app.timer.label(), "24:58");

        app.toggle_timer(start + Duration::from_secs(2));
        assert!(!app.ticker.is_armed());
        assert_eq!(app.on_tick(start + Duration::from_secs(10)), 0);

        app.toggle_timer(start);
        app.reset_timer();
        assert_eq!(app.timer, Timer::default());
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn shutdown_releases_drag_and_ticker() {
        let mut app = app_with(MemoryStore::new());
        app.toggle_window(WindowId::Timer);
        app.windows
            .begin_drag(WindowId::Timer, crate::model::Point::new(0, 0));
        app.toggle_timer(Instant::now());
        app.shutdown();
        assert!(!app.windows.is_dragging());
        assert!(!app.ticker.is_armed());
    }
}
