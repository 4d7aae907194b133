//! Configuration constants and default values.
//!
//! All application constants live here: window geometry, font-size limits,
//! on-disk file names, and user-visible strings shared between views.

// === Window Geometry ===

/// Fixed overlay width in points.
pub const WINDOW_WIDTH: f32 = 400.0;

/// Fixed overlay height in points.
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Gap between the overlay and the screen edges when parked bottom-right.
pub const SCREEN_MARGIN: f32 = 20.0;

// === Font Size ===

/// Smallest selectable font size.
pub const FONT_SIZE_MIN: u32 = 8;

/// Largest selectable font size.
pub const FONT_SIZE_MAX: u32 = 48;

/// Font size used when no settings file exists.
pub const FONT_SIZE_DEFAULT: u32 = 12;

// === On-Disk Files ===

/// File name of the persisted task list.
pub const TASKS_FILE: &str = "todo_list.json";

/// File name of the persisted settings document.
pub const SETTINGS_FILE: &str = "settings.json";

/// File name of the session log.
pub const LOG_FILE: &str = "glasspad.log";

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "glasspad";

// === Corner Radii ===

/// Corner radius of the main panel background.
pub const PANEL_RADIUS: u8 = 24;

/// Corner radius of the task list background.
pub const LIST_RADIUS: u8 = 16;

/// Corner radius of the text entry background.
pub const ENTRY_RADIUS: u8 = 14;

// === Strings ===

/// Placeholder shown in the empty task entry field.
pub const ENTRY_PLACEHOLDER: &str = "Add new task and press Enter";

/// Label above the font size control in Settings.
pub const FONT_SIZE_LABEL: &str = "Set font size:";
