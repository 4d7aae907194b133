//! Data directory resolution.
//!
//! Files live in `<platform data dir>/glasspad/`. If that directory cannot
//! be created the current directory is used instead, so the app still runs
//! from a USB stick or a locked-down account.

use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::model::constants::{APP_DIR, LOG_FILE, SETTINGS_FILE, TASKS_FILE};

/// The directory holding all persisted files, created on demand.
pub fn data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join(APP_DIR);
    if let Err(err) = fs::create_dir_all(&dir) {
        warn!("could not create data dir {}: {err}", dir.display());
        return PathBuf::from(".");
    }
    dir
}

/// Full path of the task list document.
pub fn tasks_path() -> PathBuf {
    data_dir().join(TASKS_FILE)
}

/// Full path of the settings document.
pub fn settings_path() -> PathBuf {
    data_dir().join(SETTINGS_FILE)
}

/// Full path of the session log.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE)
}
