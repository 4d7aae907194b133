//! Help view: a short welcome blurb and the hotkey table.

use eframe::egui::{Grid, RichText, Ui};

use crate::input::BINDINGS;
use crate::ui::theme;

pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.add_space(6.0);
        ui.heading("Welcome!");
        ui.add_space(10.0);
        ui.label("A small overlay for keeping your tasks in sight.");
        ui.add_space(14.0);

        // The table is rendered from the same bindings the filter matches,
        // so Help can never drift from the actual keys.
        Grid::new("hotkey-table")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for binding in BINDINGS {
                    ui.label(RichText::new(binding.keys).monospace());
                    ui.label(binding.action);
                    ui.end_row();
                }
            });

        ui.add_space(14.0);
        ui.label(
            RichText::new("Create, sort, mark, and delete tasks easily.")
                .color(theme::text_dim()),
        );
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}
