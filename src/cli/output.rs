use std::io::{self, Write};

use crate::model::Task;
use crate::ops::task_ops;

/// One line per task: `[x] text` / `[ ] text`
pub fn format_task_line(task: &Task) -> String {
    format!("{} {}", task.checkbox(), task.text)
}

pub fn write_tasks(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    for task in tasks {
        writeln!(out, "{}", format_task_line(task))?;
    }
    Ok(())
}

/// Summary line for the end of a text listing
pub fn format_remaining(tasks: &[Task]) -> String {
    let open = task_ops::remaining(tasks);
    format!("{} of {} open", open, tasks.len())
}

pub fn write_tasks_json(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tasks)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        let mut done = Task::with_id("a", "Ship it");
        done.completed = true;
        vec![done, Task::with_id("b", "Write tests")]
    }

    #[test]
    fn text_listing() {
        let mut buf = Vec::new();
        write_tasks(&mut buf, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[x] Ship it\n[ ] Write tests\n"
        );
        assert_eq!(format_remaining(&sample()), "1 of 2 open");
    }

    #[test]
    fn json_listing_is_the_stored_shape() {
        let mut buf = Vec::new();
        write_tasks_json(&mut buf, &sample()).unwrap();
        let parsed: Vec<Task> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }
}
