//! The persisted layout: which keys hold what, and how values are encoded.
//!
//! `fh_tasks` holds a JSON array of tasks. `fh_notes` holds the note text
//! verbatim. Every function here returns a typed result; deciding to ignore
//! a failure is the caller's business.

use crate::io::store::{Store, StoreError};
use crate::model::Task;

pub const TASKS_KEY: &str = "fh_tasks";
pub const NOTES_KEY: &str = "fh_notes";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored {key} is not valid: {source}")]
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
    #[error("could not encode {key}: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl PersistError {
    /// The store key the failure relates to, when known
    pub fn key(&self) -> Option<&'static str> {
        match self {
            PersistError::Decode { key, .. } | PersistError::Encode { key, .. } => Some(key),
            PersistError::Store(_) => None,
        }
    }
}

/// Read the task list. `Ok(None)` means nothing was ever stored.
pub fn load_tasks(store: &dyn Store) -> Result<Option<Vec<Task>>, PersistError> {
    let Some(raw) = store.get(TASKS_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistError::Decode {
            key: TASKS_KEY,
            source,
        })
}

/// Read the note text. Empty stored text counts as absent.
pub fn load_notes(store: &dyn Store) -> Result<Option<String>, PersistError> {
    Ok(store.get(NOTES_KEY)?.filter(|s| !s.is_empty()))
}

pub fn save_tasks(store: &mut dyn Store, tasks: &[Task]) -> Result<(), PersistError> {
    let json = serde_json::to_string(tasks).map_err(|source| PersistError::Encode {
        key: TASKS_KEY,
        source,
    })?;
    store.set(TASKS_KEY, &json)?;
    Ok(())
}

pub fn save_notes(store: &mut dyn Store, notes: &str) -> Result<(), PersistError> {
    store.set(NOTES_KEY, notes)?;
    Ok(())
}

/// Everything restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub notes: String,
}

/// Load both keys, treating any missing or unreadable entry as empty.
/// Each key is restored independently.
pub fn load_snapshot(store: &dyn Store) -> Snapshot {
    let tasks = match load_tasks(store) {
        Ok(tasks) => tasks.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "discarding stored tasks");
            Vec::new()
        }
    };
    let notes = match load_notes(store) {
        Ok(notes) => notes.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "discarding stored notes");
            String::new()
        }
    };
    Snapshot { tasks, notes }
}

/// Result of the most recent write-back, kept for the status line and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    Failed { key: &'static str, reason: String },
}

impl PersistOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, PersistOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn restores_tasks_and_notes_exactly() {
        let store = MemoryStore::new()
            .with_entry(TASKS_KEY, r#"[{"id":"1","text":"buy milk","completed":false}]"#)
            .with_entry(NOTES_KEY, "draft");
        let snap = load_snapshot(&store);
        assert_eq!(snap.tasks, vec![Task::with_id("1", "buy milk")]);
        assert_eq!(snap.notes, "draft");
    }

    #[test]
    fn corrupted_tasks_yield_empty_list_but_keep_notes() {
        let store = MemoryStore::new()
            .with_entry(TASKS_KEY, "not json {{{")
            .with_entry(NOTES_KEY, "draft");
        assert!(matches!(
            load_tasks(&store),
            Err(PersistError::Decode { key: TASKS_KEY, .. })
        ));
        let snap = load_snapshot(&store);
        assert!(snap.tasks.is_empty());
        assert_eq!(snap.notes, "draft");
    }

    #[test]
    fn wrong_shape_counts_as_corrupt() {
        let store = MemoryStore::new().with_entry(TASKS_KEY, r#"{"id":"1"}"#);
        assert!(load_tasks(&store).is_err());
        assert_eq!(load_snapshot(&store), Snapshot::default());
    }

    #[test]
    fn unreadable_store_yields_defaults() {
        let store = MemoryStore::new().failing_reads();
        assert!(matches!(load_notes(&store), Err(PersistError::Store(_))));
        assert_eq!(load_snapshot(&store), Snapshot::default());
    }

    #[test]
    fn missing_keys_are_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_tasks(&store).unwrap(), None);
        assert_eq!(load_notes(&store).unwrap(), None);
    }

    #[test]
    fn notes_are_stored_verbatim() {
        let mut store = MemoryStore::new();
        save_notes(&mut store, "  a\n{not json}\n").unwrap();
        assert_eq!(
            store.get(NOTES_KEY).unwrap().as_deref(),
            Some("  a\n{not json}\n")
        );
    }

    #[test]
    fn saved_tasks_reload_in_order() {
        let mut store = MemoryStore::new();
        let mut done = Task::with_id("b", "second");
        done.completed = true;
        let tasks = vec![Task::with_id("a", "first"), done];
        save_tasks(&mut store, &tasks).unwrap();
        assert_eq!(load_tasks(&store).unwrap(), Some(tasks));
    }

    #[test]
    fn write_failure_is_typed() {
        let mut store = MemoryStore::new().failing_writes();
        let err = save_tasks(&mut store, &[]).unwrap_err();
        assert!(matches!(err, PersistError::Store(StoreError::Unavailable(_))));
        assert_eq!(err.key(), None);
    }
}
