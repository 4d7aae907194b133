//! Immutable UI configuration.
//!
//! Built once in `main` from the loaded preferences and handed to the view
//! constructors. A font-size change saved in Settings lands in the file,
//! not in this struct, and applies the next time the overlay starts.

use crate::model::constants::{SCREEN_MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::storage::Preferences;

#[derive(Debug, Clone, Copy)]
pub struct UiConfig {
    /// Base font size in points, already clamped to the valid range.
    pub font_size: u32,
    /// Fixed window width in points.
    pub window_width: f32,
    /// Fixed window height in points.
    pub window_height: f32,
    /// Gap to the screen edges when parked bottom-right.
    pub screen_margin: f32,
}

impl UiConfig {
    pub fn from_preferences(prefs: Preferences) -> Self {
        let prefs = prefs.clamped();
        Self {
            font_size: prefs.font_size,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            screen_margin: SCREEN_MARGIN,
        }
    }
}
