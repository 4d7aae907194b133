//! Task list state (pure Rust, no I/O).
//!
//! [`TaskList`] is the in-memory ordered sequence behind the Task List view.
//! Every mutator reports whether it changed anything so the storage layer
//! can skip writes for rejected input.

use serde::{Deserialize, Serialize};

/// A single to-do entry. Field names are the on-disk JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// User-entered text, never empty, surrounding whitespace removed.
    pub text: String,
    /// Completion flag.
    pub checked: bool,
}

impl Task {
    /// New unchecked task. The caller is responsible for trimming.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }
}

/// Ordered task sequence. Order is user-significant and preserved verbatim
/// through persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new unchecked task from user input.
    ///
    /// The text is trimmed first; empty or whitespace-only input is rejected
    /// and leaves the list untouched. Returns whether a task was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text));
        true
    }

    /// Flip the checked state of every listed index.
    ///
    /// Out-of-range indices are ignored. Returns whether anything flipped.
    pub fn toggle(&mut self, indices: &[usize]) -> bool {
        let mut changed = false;
        for &index in indices {
            if let Some(task) = self.tasks.get_mut(index) {
                task.checked = !task.checked;
                changed = true;
            }
        }
        changed
    }

    /// Delete every listed index. Duplicates and out-of-range indices are
    /// ignored. Returns whether anything was removed.
    pub fn remove(&mut self, indices: &[usize]) -> bool {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.tasks.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        // Remove back to front so earlier indices stay valid.
        for index in sorted.iter().rev() {
            self.tasks.remove(*index);
        }
        !sorted.is_empty()
    }

    /// Replace the current order with a permutation of `0..len`.
    ///
    /// Anything that is not an exact permutation (wrong length, duplicate or
    /// out-of-range entries) is rejected. Returns whether the order was
    /// applied.
    pub fn reorder(&mut self, order: &[usize]) -> bool {
        if !is_permutation(order, self.tasks.len()) {
            return false;
        }
        self.tasks = order.iter().map(|&i| self.tasks[i].clone()).collect();
        true
    }
}

/// True if `order` is a permutation of `0..len`.
fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut sorted: Vec<usize> = order.to_vec();
    sorted.sort_unstable();
    sorted.iter().copied().eq(0..len)
}

/// The permutation produced by dragging item `from` to insertion point
/// `insert` (an index in `0..=len`, counted before the item is lifted out).
///
/// Used by the drag-and-drop path in the Task List view; kept here so the
/// arithmetic is testable without a UI.
pub fn moved_order(len: usize, from: usize, insert: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if from >= len {
        return order;
    }
    let item = order.remove(from);
    let mut insert = insert.min(len);
    if from < insert {
        insert -= 1;
    }
    order.insert(insert.min(order.len()), item);
    order
}
