//! # Task Tracker
//!
//! A small command-line task tracker backed by a single JSON file.
//!
//! ```bash
//! task-tracker add Buy groceries
//! task-tracker update 1 "Buy milk and bread"
//! task-tracker mark-in-progress 1
//! task-tracker mark-done 1 2
//! task-tracker list in-progress done
//! task-tracker delete 1
//! ```
//!
//! ## Data Storage
//!
//! Tasks are saved as a pretty-printed JSON array in your local data directory:
//! *   Linux: `~/.local/share/task-tracker/data.json`
//! *   macOS: `~/Library/Application Support/task-tracker/data.json`
//! *   Windows: `%LOCALAPPDATA%\task-tracker\data.json`
//!
//! Override it with `--file <PATH>` or the `TASK_TRACKER_DB` environment variable.
//! A malformed file is treated as empty and overwritten by the next change.

pub mod commands;
pub mod models;
pub mod parser;
pub mod storage;
