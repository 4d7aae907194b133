//! The three presentation surfaces and the shared glassy theme.

pub mod help;
pub mod settings;
pub mod theme;
pub mod todo;

pub use help::HelpView;
pub use settings::SettingsView;
pub use todo::TodoView;
