//! Settings view: the bounded font-size control.

use eframe::egui::{DragValue, RichText, Ui};

use crate::config::UiConfig;
use crate::model::constants::{FONT_SIZE_LABEL, FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::storage::PrefsStore;

pub struct SettingsView {
    /// Working copy shown in the control, seeded from the startup config.
    font_size: u32,
}

impl SettingsView {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            font_size: config.font_size,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, prefs: &mut PrefsStore) {
        ui.add_space(6.0);
        ui.label(FONT_SIZE_LABEL);
        ui.add_space(4.0);

        let control = ui.add(
            DragValue::new(&mut self.font_size)
                .range(FONT_SIZE_MIN..=FONT_SIZE_MAX)
                .speed(0.2),
        );
        if control.changed() {
            prefs.save(self.font_size);
        }

        ui.add_space(10.0);
        ui.label(
            RichText::new("Applies the next time the overlay starts.")
                .small()
                .color(crate::ui::theme::text_dim()),
        );
    }
}
