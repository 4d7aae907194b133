//! Pure application state: the task list and shared constants.

pub mod constants;
pub mod task;

pub use constants::*;
pub use task::{moved_order, Task, TaskList};
