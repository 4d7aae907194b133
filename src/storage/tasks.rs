//! Task list store: in-memory [`TaskList`] plus its backing JSON file.
//!
//! The on-disk document is a UTF-8 array of `{ "text", "checked" }` objects
//! with human-readable indentation. Every successful mutation rewrites the
//! whole file from the in-memory order; rejected input triggers no write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, warn};

use super::StoreError;
use crate::model::{Task, TaskList};

pub struct TaskStore {
    list: TaskList,
    path: PathBuf,
}

impl TaskStore {
    /// Load the store from `path`.
    ///
    /// A missing file yields an empty list. An unreadable or unparsable file
    /// is logged and also yields an empty list; loading never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let list = match read_list(&path) {
            Ok(list) => list,
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => TaskList::new(),
            Err(err) => {
                warn!("could not load task list from {}: {err}", path.display());
                TaskList::new()
            }
        };
        Self { list, path }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a task from user input. Empty or whitespace-only text is a
    /// no-op and does not touch the file. Returns whether a task was added.
    pub fn add(&mut self, text: &str) -> bool {
        if self.list.add(text) {
            self.persist();
            return true;
        }
        false
    }

    /// Flip the checked state of the given indices and persist.
    pub fn toggle(&mut self, indices: &[usize]) {
        if self.list.toggle(indices) {
            self.persist();
        }
    }

    /// Delete the given indices and persist.
    pub fn remove(&mut self, indices: &[usize]) {
        if self.list.remove(indices) {
            self.persist();
        }
    }

    /// Apply a permutation of the current indices (drag-and-drop result) and
    /// persist. Non-permutations are rejected. Returns whether it applied.
    pub fn reorder(&mut self, order: &[usize]) -> bool {
        if self.list.reorder(order) {
            self.persist();
            return true;
        }
        false
    }

    /// Rewrite the whole document from the in-memory list.
    ///
    /// Best-effort: a failed write is logged and the app keeps running on
    /// in-memory state.
    pub fn persist(&self) {
        if let Err(err) = self.write() {
            error!("could not persist task list to {}: {err}", self.path.display());
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self.list.tasks())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_list(path: &Path) -> Result<TaskList, StoreError> {
    let contents = fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    Ok(TaskList::from_tasks(tasks))
}
