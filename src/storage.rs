use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::models::{Status, Task};

/// Failures the store cannot recover from.
///
/// Malformed JSON is deliberately absent: it degrades to an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot access data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no task ids left to allocate")]
    IdsExhausted,
    #[error("cannot encode tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Returns the default location of the data file.
///
/// `<data_local_dir>/task-tracker/data.json` when the platform has a data
/// directory, `./data.json` otherwise.
pub fn default_db_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut p) => {
            p.push("task-tracker");
            p.push("data.json");
            p
        }
        None => PathBuf::from("data.json"),
    }
}

/// Returns `max(id) + 1`, or `1` for an empty collection.
///
/// `None` once the largest id is `u32::MAX`.
pub fn allocate_id(tasks: &[Task]) -> Option<u32> {
    tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)
}

/// The JSON file holding every task.
///
/// Each operation reads the whole file, applies one change and (when
/// mutating) rewrites the whole file. There is no locking: concurrent
/// invocations race and the last writer wins.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks, creating the file as `[]` if it does not exist yet.
    ///
    /// An empty or unparseable file yields an empty collection; the next
    /// mutating operation will then overwrite whatever was there.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            self.create_empty()?;
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        // Invalid UTF-8 is decoded lossily and then fails as malformed JSON.
        let s = String::from_utf8_lossy(&bytes);

        if s.trim().is_empty() {
            warn!(path = %self.path.display(), "data file is empty, using an empty task list");
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Vec<Task>>(&s) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                Ok(tasks)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed data file, using an empty task list");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the data file with the given tasks, pretty-printed.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let s = serde_json::to_string_pretty(tasks)?;
        self.write_raw(&s)?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Appends a new `ToDo` task and returns it.
    pub fn add(&self, description: String) -> Result<Task, StorageError> {
        let mut tasks = self.load()?;
        let id = allocate_id(&tasks).ok_or(StorageError::IdsExhausted)?;
        let task = Task::new(id, description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Replaces a task's description.
    ///
    /// Returns `None` without writing when no task has that id.
    pub fn update(&self, id: u32, description: String) -> Result<Option<Task>, StorageError> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.set_description(description);
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(Some(updated))
    }

    /// Removes every task whose id is listed and returns how many went.
    ///
    /// Unknown ids are ignored; the file is rewritten either way.
    pub fn delete(&self, ids: &[u32]) -> Result<usize, StorageError> {
        let mut tasks = self.load()?;
        let len_before = tasks.len();
        tasks.retain(|t| !ids.contains(&t.id));
        self.save(&tasks)?;
        Ok(len_before - tasks.len())
    }

    /// Moves every listed task to `status` and returns how many matched.
    ///
    /// Unknown ids are ignored; the file is rewritten either way.
    pub fn set_status(&self, ids: &[u32], status: Status) -> Result<usize, StorageError> {
        let mut tasks = self.load()?;
        let mut matched = 0;
        for t in tasks.iter_mut().filter(|t| ids.contains(&t.id)) {
            t.set_status(status);
            matched += 1;
        }
        self.save(&tasks)?;
        Ok(matched)
    }

    /// Tasks whose status is in `statuses`, in insertion order.
    pub fn list(&self, statuses: &[Status]) -> Result<Vec<Task>, StorageError> {
        let mut tasks = self.load()?;
        tasks.retain(|t| statuses.contains(&t.status));
        Ok(tasks)
    }

    fn create_empty(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        self.write_raw("[]")?;
        info!(path = %self.path.display(), "created data file");
        Ok(())
    }

    fn write_raw(&self, contents: &str) -> Result<(), StorageError> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(contents.as_bytes()))
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io { path: self.path.clone(), source }
    }
}
