//! Task List view: text entry, selectable task rows, drag-and-drop order.
//!
//! Selection follows the usual extended-selection rules: click selects one
//! row, Ctrl+click toggles a row, Shift+click extends from the anchor.
//! Keys scoped to the list only act while the entry field is unfocused.

use std::collections::BTreeSet;

use eframe::egui::{self, Checkbox, Context, Id, Key, RichText, ScrollArea, TextEdit, Ui};

use crate::config::UiConfig;
use crate::model::constants::ENTRY_PLACEHOLDER;
use crate::model::moved_order;
use crate::storage::TaskStore;
use crate::ui::theme;

/// Payload carried while a task row is dragged.
#[derive(Clone, Copy)]
struct DragRow(usize);

pub struct TodoView {
    draft: String,
    selected: BTreeSet<usize>,
    /// Last plainly clicked row, the start point for Shift+click ranges.
    anchor: Option<usize>,
    entry_id: Id,
    /// Request keyboard focus for the entry on the next frame.
    focus_entry: bool,
    /// The entry owned focus during this frame, so list keys must not act.
    entry_active: bool,
    entry_font: egui::FontId,
}

impl TodoView {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            draft: String::new(),
            selected: BTreeSet::new(),
            anchor: None,
            entry_id: Id::new("task-entry"),
            focus_entry: true,
            entry_active: false,
            entry_font: theme::entry_font(config),
        }
    }

    pub fn show(&mut self, ctx: &Context, ui: &mut Ui, store: &mut TaskStore) {
        // Rows may have been removed since the selection was made.
        self.selected.retain(|&i| i < store.len());

        self.entry_row(ui, store);
        ui.add_space(10.0);
        self.task_list(ctx, ui, store);
        self.list_keys(ctx, store);
    }

    fn entry_row(&mut self, ui: &mut Ui, store: &mut TaskStore) {
        theme::entry_frame().show(ui, |ui| {
            let entry = ui.add(
                TextEdit::singleline(&mut self.draft)
                    .id(self.entry_id)
                    .hint_text(ENTRY_PLACEHOLDER)
                    .font(self.entry_font.clone())
                    .frame(false)
                    .desired_width(ui.available_width()),
            );

            if self.focus_entry {
                entry.request_focus();
                self.focus_entry = false;
            }

            let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if submitted {
                if store.add(&self.draft) {
                    self.draft.clear();
                }
                entry.request_focus();
            }

            self.entry_active = entry.has_focus() || submitted;
        });
    }

    fn task_list(&mut self, ctx: &Context, ui: &mut Ui, store: &mut TaskStore) {
        // Snapshot the rows so the store can be mutated after the loop.
        let rows: Vec<(String, bool)> = store
            .tasks()
            .iter()
            .map(|task| (task.text.clone(), task.checked))
            .collect();

        let mut toggled: Option<usize> = None;
        let mut clicked: Option<usize> = None;
        let mut dropped: Option<(usize, usize)> = None;

        let list = theme::list_frame().show(ui, |ui| {
            ui.set_min_height(ui.available_height());
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                for (index, (text, checked)) in rows.iter().enumerate() {
                    let response =
                        self.task_row(ui, index, text, *checked, &mut toggled, &mut clicked);
                    if let Some((from, insert)) = drop_target(ui, &response, index) {
                        dropped = Some((from, insert));
                    }
                }
                if rows.is_empty() {
                    ui.add_space(4.0);
                    ui.label(RichText::new("No tasks yet.").color(theme::text_dim()).italics());
                }
            });
        });

        // A click anywhere inside the list takes focus away from the entry
        // field so the list-scoped keys are not swallowed by it.
        let clicked_in_list =
            list.response.contains_pointer() && ctx.input(|i| i.pointer.primary_pressed());
        if clicked_in_list {
            ctx.memory_mut(|m| m.surrender_focus(self.entry_id));
        }

        if let Some(index) = toggled {
            store.toggle(&[index]);
        }
        if let Some(index) = clicked {
            self.update_selection(ctx, index);
        }
        if let Some((from, insert)) = dropped {
            let order = moved_order(store.len(), from, insert);
            let unchanged = order.iter().copied().eq(0..store.len());
            if !unchanged && store.reorder(&order) {
                self.selected.clear();
                self.anchor = None;
            }
        }
    }

    fn task_row(
        &self,
        ui: &mut Ui,
        index: usize,
        text: &str,
        checked: bool,
        toggled: &mut Option<usize>,
        clicked: &mut Option<usize>,
    ) -> egui::Response {
        let row_id = Id::new(("task-row", index));
        let is_selected = self.selected.contains(&index);

        ui.dnd_drag_source(row_id, DragRow(index), |ui| {
            ui.horizontal(|ui| {
                let mut state = checked;
                if ui.add(Checkbox::without_text(&mut state)).changed() {
                    *toggled = Some(index);
                }

                let mut label = RichText::new(text);
                if checked {
                    label = label.strikethrough().color(theme::text_dim());
                }
                if ui.selectable_label(is_selected, label).clicked() {
                    *clicked = Some(index);
                }
            });
        })
        .response
    }

    fn update_selection(&mut self, ctx: &Context, index: usize) {
        let modifiers = ctx.input(|i| i.modifiers);
        if modifiers.shift {
            let anchor = self.anchor.unwrap_or(index);
            let (lo, hi) = if anchor <= index {
                (anchor, index)
            } else {
                (index, anchor)
            };
            self.selected = (lo..=hi).collect();
        } else if modifiers.ctrl || modifiers.command {
            if !self.selected.insert(index) {
                self.selected.remove(&index);
            }
            self.anchor = Some(index);
        } else {
            self.selected.clear();
            self.selected.insert(index);
            self.anchor = Some(index);
        }
    }

    fn list_keys(&mut self, ctx: &Context, store: &mut TaskStore) {
        // Escape always returns focus to the entry field, without touching
        // the navigation state.
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.focus_entry = true;
        }

        if self.entry_active || self.selected.is_empty() {
            return;
        }

        let (delete, toggle) = ctx.input(|i| {
            (
                i.key_pressed(Key::Backspace) || i.key_pressed(Key::Delete),
                i.key_pressed(Key::Space) || i.key_pressed(Key::Enter),
            )
        });

        if delete {
            let indices: Vec<usize> = self.selected.iter().copied().collect();
            store.remove(&indices);
            self.selected.clear();
            self.anchor = None;
        } else if toggle {
            let indices: Vec<usize> = self.selected.iter().copied().collect();
            store.toggle(&indices);
        }
    }
}

/// While another row is dragged over this one, paint the insertion line and
/// report a finished drop as `(source index, insertion point)`.
fn drop_target(ui: &Ui, response: &egui::Response, index: usize) -> Option<(usize, usize)> {
    let pointer = ui.input(|i| i.pointer.interact_pos())?;
    response.dnd_hover_payload::<DragRow>()?;

    let rect = response.rect;
    let stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    let insert = if pointer.y < rect.center().y {
        ui.painter().hline(rect.x_range(), rect.top(), stroke);
        index
    } else {
        ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
        index + 1
    };

    let source = response.dnd_release_payload::<DragRow>()?;
    Some((source.0, insert))
}
