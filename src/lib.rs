//! Glasspad: a translucent, frameless, always-on-top to-do overlay with
//! companion Help and Settings panels, switched via application-wide
//! hotkeys (Alt+B to-do, Alt+H help, Alt+D settings, Alt+E exit).
//!
//! State lives in two small JSON documents, rewritten in full after every
//! mutation. Everything runs on the single UI thread.

pub mod app;
pub mod config;
pub mod events;
pub mod handlers;
pub mod input;
pub mod model;
pub mod storage;
pub mod ui;

pub use app::GlasspadApp;
pub use config::UiConfig;
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{Navigator, View};
pub use model::{Task, TaskList};
pub use storage::{Preferences, PrefsStore, TaskStore};
