//! Tasks and notes written by one session are restored by the next, through
//! the real file store.

use std::fs;

use focus_helper::io::persist::{NOTES_KEY, TASKS_KEY};
use focus_helper::io::store::{FileStore, Store};
use focus_helper::model::UiConfig;
use focus_helper::tui::app::{App, Route};
use pretty_assertions::assert_eq;

fn open(dir: &std::path::Path) -> App {
    let store = FileStore::open(dir).unwrap();
    App::new(Box::new(store), &UiConfig::default())
}

#[test]
fn session_round_trip() {
    let tmp = tempfile::TempDir::new().unwrap();

    let mut app = open(tmp.path());
    assert_eq!(app.route, Route::Landing);
    assert!(app.tasks.is_empty());
    assert_eq!(app.notes, "");

    app.add_task("Read chapter 3");
    app.add_task("Call the bank");
    let id = app.tasks[1].id.clone();
    app.toggle_task(&id);
    app.set_notes("remember:\n- milk");
    app.shutdown();

    let app = open(tmp.path());
    let texts: Vec<(&str, bool)> = app
        .tasks
        .iter()
        .map(|t| (t.text.as_str(), t.completed))
        .collect();
    assert_eq!(texts, vec![("Call the bank", false), ("Read chapter 3", true)]);
    assert_eq!(app.notes, "remember:\n- milk");
}

#[test]
fn stored_layout_is_json_array_and_raw_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut app = open(tmp.path());
    app.add_task("only");
    app.set_notes("{\"not\": \"json\"}");
    app.flush();

    let raw_tasks = fs::read_to_string(tmp.path().join(TASKS_KEY)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw_tasks).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["text"], "only");
    assert_eq!(arr[0]["completed"], false);
    assert!(arr[0]["id"].is_string());

    let raw_notes = fs::read_to_string(tmp.path().join(NOTES_KEY)).unwrap();
    assert_eq!(raw_notes, "{\"not\": \"json\"}");
}

#[test]
fn corrupt_tasks_load_empty_and_keep_notes() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join(TASKS_KEY), "[{]").unwrap();
    fs::write(tmp.path().join(NOTES_KEY), "kept").unwrap();

    let app = open(tmp.path());
    assert!(app.tasks.is_empty());
    assert_eq!(app.notes, "kept");
}

#[test]
fn deleting_every_task_stores_empty_array() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut app = open(tmp.path());
    app.add_task("gone soon");
    app.flush();
    let id = app.tasks[0].id.clone();
    app.delete_task(&id);
    app.flush();

    let store = FileStore::open(tmp.path()).unwrap();
    assert_eq!(store.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
}
