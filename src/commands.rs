use std::io::{self, Write};

use chrono::{DateTime, Local};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Status, Task};
use crate::parser::Command;
use crate::storage::{StorageError, TaskStore};

pub const HELP_TEXT: &str = "\
-----------------------
Task Tracker CLI
-----------------------
Usage:
  add <description>                      Add a new task with a description
  update <id> <description>              Update the description of an existing task
  delete <id1> [id2] [id3] ...           Delete one or more tasks by ID
  mark-todo <id1> [id2] [id3] ...        Mark one or more tasks as 'todo'
  mark-in-progress <id1> [id2] [id3] ... Mark one or more tasks as 'in-progress'
  mark-done <id1> [id2] [id3] ...        Mark one or more tasks as 'done'
  list [status ...]                      List tasks; optionally filter by status:
                                         - 'todo', 'in-progress', or 'done'
                                         - If no status is provided, lists all tasks
  help                                   Show this message

Examples:
  add \"Buy groceries\"
  update 3 \"Buy milk and bread\"
  delete 1 4 5
  mark-done 2 7
  list todo
  list
";

/// Errors surfaced while running a command.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs a validated command against the store and writes the result to `out`.
pub fn dispatch<W: Write>(store: &TaskStore, command: Command, out: &mut W) -> Result<(), DispatchError> {
    match command {
        Command::Add { description } => {
            let task = store.add(description)?;
            writeln!(out, "Task added to list. {}", summary(&task))?;
        }
        Command::Update { id, description } => match store.update(id, description)? {
            Some(task) => writeln!(out, "Task updated. {}", summary(&task))?,
            None => writeln!(out, "Task with id {} not found!", id)?,
        },
        Command::Delete { ids } => {
            let removed = store.delete(&ids)?;
            writeln!(out, "Deleted {} task(s).", removed)?;
        }
        Command::MarkToDo { ids } => mark(store, &ids, Status::ToDo, out)?,
        Command::MarkInProgress { ids } => mark(store, &ids, Status::InProgress, out)?,
        Command::MarkDone { ids } => mark(store, &ids, Status::Done, out)?,
        Command::List { statuses } => {
            let tasks = store.list(&statuses)?;
            if tasks.is_empty() {
                writeln!(out, "No tasks found.")?;
            } else {
                writeln!(out, "{}", render_table(&tasks))?;
            }
        }
        Command::Help => write!(out, "{}", HELP_TEXT)?,
    }
    Ok(())
}

fn mark<W: Write>(store: &TaskStore, ids: &[u32], status: Status, out: &mut W) -> Result<(), DispatchError> {
    let marked = store.set_status(ids, status)?;
    writeln!(out, "Marked {} task(s) as {}.", marked, status)?;
    Ok(())
}

fn summary(task: &Task) -> String {
    format!(
        "Task id: {}, Task status: {}, Task Description: {}",
        task.id, task.status, task.description
    )
}

/// Formats tasks as a table, keeping the order given.
pub fn render_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Created").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let status_color = match t.status {
            Status::ToDo => Color::Yellow,
            Status::InProgress => Color::Cyan,
            Status::Done => Color::Green,
        };
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.description),
            Cell::new(t.status).fg(status_color),
            Cell::new(timestamp(&t.created_at)),
            Cell::new(timestamp(&t.updated_at)),
        ]);
    }
    table
}

fn timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
