use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl Status {
    /// Every status, in display order.
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::ToDo => "ToDo",
            Status::InProgress => "InProgress",
            Status::Done => "Done",
        };
        f.write_str(s)
    }
}

/// A status name that matches none of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

/// Matches case-insensitively with hyphens ignored, so `in-progress`,
/// `InProgress` and `inprogress` all resolve to [`Status::InProgress`].
impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s.chars().filter(|c| *c != '-').collect::<String>().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.to_string().to_lowercase() == folded)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Represents a single tracked task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, never changed after creation.
    pub id: u32,
    /// Free-form text describing the work.
    pub description: String,
    /// Current lifecycle state.
    pub status: Status,
    /// Timestamp when the task was created.
    pub created_at: DateTime<Local>,
    /// Timestamp of the last description or status change.
    pub updated_at: DateTime<Local>,
}

impl Task {
    /// Creates a `ToDo` task with both timestamps set to now.
    pub fn new(id: u32, description: String) -> Self {
        let now = Local::now();
        Task {
            id,
            description,
            status: Status::ToDo,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.touch();
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    // Clock skew must never make updated_at precede created_at.
    fn touch(&mut self) {
        self.updated_at = Local::now().max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_with_or_without_hyphens() {
        assert_eq!("in-progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("inprogress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("IN-PROGRESS".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("to-do".parse::<Status>(), Ok(Status::ToDo));
        assert_eq!("Done".parse::<Status>(), Ok(Status::Done));
        assert_eq!(
            "finished".parse::<Status>(),
            Err(UnknownStatus("finished".into()))
        );
    }

    #[test]
    fn status_serializes_with_internal_casing() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
    }

    #[test]
    fn new_task_starts_as_todo() {
        let task = Task::new(7, "Write docs".into());
        assert_eq!(task.status, Status::ToDo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn mutations_refresh_updated_at() {
        let mut task = Task::new(1, "a".into());
        let created = task.created_at;
        task.set_status(Status::Done);
        assert!(task.updated_at >= created);
        task.set_description("b".into());
        assert_eq!(task.description, "b");
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn task_json_uses_camel_case_fields() {
        let task = Task::new(1, "a".into());
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["status"], "ToDo");
    }
}
