//! Input handling: the application-wide hotkey filter.

pub mod hotkeys;

pub use hotkeys::{poll, Binding, BINDINGS};
