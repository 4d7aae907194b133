//! JSON persistence for the task list and the settings document.
//!
//! Both stores follow the same discipline: loads fail soft (log and fall
//! back to defaults, never surface an error), writes rewrite the whole
//! document and are best-effort (log and keep running on in-memory state).

pub mod paths;
pub mod prefs;
pub mod tasks;

use thiserror::Error;

pub use prefs::{Preferences, PrefsStore};
pub use tasks::TaskStore;

/// Failures of the fallible half of a store. Swallowed (and logged) at the
/// public soft-fail boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
