//! Preferences store: the single font-size setting.
//!
//! The document is a JSON object holding exactly one key, `font_size`.
//! Any load failure (missing file, bad JSON, missing key, wrong type)
//! yields the default; the value is clamped before every write so an
//! out-of-range size is never persisted.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, warn};
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::model::constants::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN};

/// The persisted settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub font_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
        }
    }
}

impl Preferences {
    /// Copy with the font size forced into the valid range.
    pub fn clamped(self) -> Self {
        Self {
            font_size: self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
        }
    }
}

pub struct PrefsStore {
    prefs: Preferences,
    path: PathBuf,
}

impl PrefsStore {
    /// Load preferences from `path`, falling back to the default on any
    /// failure. Loading never fails; a bad file is logged.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match read_prefs(&path) {
            Ok(prefs) => prefs.clamped(),
            Err(StoreError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Preferences::default()
            }
            Err(err) => {
                warn!("could not load settings from {}: {err}", path.display());
                Preferences::default()
            }
        };
        Self { prefs, path }
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn font_size(&self) -> u32 {
        self.prefs.font_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clamp `font_size` to the valid range and rewrite the document.
    ///
    /// The bounded UI control already enforces the range; the clamp keeps a
    /// direct caller from corrupting the file. Write failures are logged and
    /// swallowed.
    pub fn save(&mut self, font_size: u32) {
        self.prefs.font_size = font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        if let Err(err) = self.write() {
            error!("could not persist settings to {}: {err}", self.path.display());
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.prefs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_prefs(path: &Path) -> Result<Preferences, StoreError> {
    let contents = fs::read_to_string(path)?;
    let prefs: Preferences = serde_json::from_str(&contents)?;
    Ok(prefs)
}
