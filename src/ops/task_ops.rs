//! Mutations on the task list. Every operation reports whether it changed
//! anything so the caller knows when a write-back is due.

use crate::model::task::Task;

/// Prepend a new task. Blank text is ignored. Returns the new task's id.
pub fn add_task(tasks: &mut Vec<Task>, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let task = Task::new(text);
    let id = task.id.clone();
    tasks.insert(0, task);
    Some(id)
}

/// Flip `completed` on the task with `id`
pub fn toggle_task(tasks: &mut [Task], id: &str) -> bool {
    match find_task_mut(tasks, id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace the text of the task with `id`. Blank text is ignored.
pub fn edit_task(tasks: &mut [Task], id: &str, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    match find_task_mut(tasks, id) {
        Some(task) if task.text != text => {
            task.text = text.to_string();
            true
        }
        _ => false,
    }
}

/// Remove the task with `id`
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == id)
}

fn find_task_mut<'a>(tasks: &'a mut [Task], id: &str) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

/// Number of tasks not yet completed
pub fn remaining(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn sample() -> Vec<Task> {
        vec![
            Task::with_id("3", "third"),
            Task::with_id("2", "second"),
            Task::with_id("1", "first"),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn add_prepends_trimmed_open_task() {
        let mut tasks = sample();
        let id = add_task(&mut tasks, "  fourth  ").unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "fourth");
        assert!(!tasks[0].completed);
        assert_eq!(ids(&tasks[1..]), vec!["3", "2", "1"]);
    }

    #[test]
    fn add_blank_is_noop() {
        let mut tasks = sample();
        assert_eq!(add_task(&mut tasks, ""), None);
        assert_eq!(add_task(&mut tasks, "   "), None);
        assert_eq!(add_task(&mut tasks, "\t\n"), None);
        assert_eq!(tasks, sample());
    }

    #[test]
    fn toggle_only_touches_matching_task() {
        let mut tasks = sample();
        assert!(toggle_task(&mut tasks, "2"));
        assert!(tasks[1].completed);
        assert!(!tasks[0].completed && !tasks[2].completed);
        assert!(toggle_task(&mut tasks, "2"));
        assert_eq!(tasks, sample());
        assert!(!toggle_task(&mut tasks, "nope"));
    }

    #[test]
    fn edit_replaces_text_but_not_id() {
        let mut tasks = sample();
        assert!(edit_task(&mut tasks, "1", " renamed "));
        assert_eq!(tasks[2].id, "1");
        assert_eq!(tasks[2].text, "renamed");
    }

    #[test]
    fn edit_blank_leaves_text_unchanged() {
        let mut tasks = sample();
        assert!(!edit_task(&mut tasks, "1", ""));
        assert!(!edit_task(&mut tasks, "1", "   "));
        assert_eq!(tasks[2].text, "first");
    }

    #[test]
    fn edit_unknown_or_identical_reports_no_change() {
        let mut tasks = sample();
        assert!(!edit_task(&mut tasks, "nope", "x"));
        assert!(!edit_task(&mut tasks, "1", "first"));
    }

    #[test]
    fn delete_removes_only_matching_task() {
        let mut tasks = sample();
        assert!(delete_task(&mut tasks, "2"));
        assert_eq!(ids(&tasks), vec!["3", "1"]);
        assert!(!delete_task(&mut tasks, "2"));
    }

    #[test]
    fn ids_stay_unique_and_stable_across_mixed_operations() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "a").unwrap();
        let b = add_task(&mut tasks, "b").unwrap();
        let c = add_task(&mut tasks, "c").unwrap();
        toggle_task(&mut tasks, &b);
        edit_task(&mut tasks, &a, "a2");
        delete_task(&mut tasks, &c);
        let d = add_task(&mut tasks, "d").unwrap();
        add_task(&mut tasks, " ");
        edit_task(&mut tasks, &d, "");

        assert_eq!(ids(&tasks), vec![d.as_str(), b.as_str(), a.as_str()]);
        let unique: HashSet<_> = tasks.iter().map(|t| &t.id).collect();
        assert_eq!(unique.len(), tasks.len());
        assert_eq!(find_task(&tasks, &a).unwrap().text, "a2");
        assert!(find_task(&tasks, &b).unwrap().completed);
        assert_eq!(remaining(&tasks), 2);
    }
}
