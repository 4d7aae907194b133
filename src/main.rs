use std::fs::File;

use eframe::egui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use glasspad::config::UiConfig;
use glasspad::model::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use glasspad::storage::{paths, PrefsStore, TaskStore};
use glasspad::GlasspadApp;

fn main() -> eframe::Result<()> {
    init_logging();

    let tasks = TaskStore::load(paths::tasks_path());
    let prefs = PrefsStore::load(paths::settings_path());
    let config = UiConfig::from_preferences(prefs.preferences());
    log::info!(
        "starting with {} tasks, font size {}",
        tasks.len(),
        config.font_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("glasspad")
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_transparent(true)
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "glasspad",
        options,
        Box::new(move |cc| Ok(Box::new(GlasspadApp::new(cc, config, tasks, prefs)))),
    )
}

/// File logger in the data directory. Failing to set it up is not fatal;
/// the overlay just runs unlogged.
fn init_logging() {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(file) = File::create(paths::log_path()) {
        let _ = WriteLogger::init(LevelFilter::Info, config, file);
    }
}
