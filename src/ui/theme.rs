//! The glassy look: translucent white surfaces on a transparent window.
//!
//! Colors are white at varying opacities so the desktop shows through.
//! Font sizes come from the startup [`UiConfig`] and are written into the
//! egui text styles once; nothing restyles at runtime.

use eframe::egui::{
    Color32, Context, CornerRadius, FontFamily, FontId, Frame, Margin, TextStyle,
};

use crate::config::UiConfig;
use crate::model::constants::{ENTRY_RADIUS, LIST_RADIUS, PANEL_RADIUS};

fn white(alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, alpha)
}

/// Main panel background, white at 15% opacity.
pub fn panel_fill() -> Color32 {
    white(38)
}

/// List and entry backgrounds, white at 10% opacity.
pub fn surface_fill() -> Color32 {
    white(26)
}

/// Selected row background, white at 20% opacity.
pub fn selection_fill() -> Color32 {
    white(51)
}

/// Dimmed text for completed tasks and captions.
pub fn text_dim() -> Color32 {
    white(160)
}

/// Rounded translucent frame behind the whole panel.
pub fn panel_frame() -> Frame {
    Frame::NONE
        .fill(panel_fill())
        .corner_radius(CornerRadius::same(PANEL_RADIUS))
        .inner_margin(Margin::same(15))
}

/// Rounded translucent frame behind the task list.
pub fn list_frame() -> Frame {
    Frame::NONE
        .fill(surface_fill())
        .corner_radius(CornerRadius::same(LIST_RADIUS))
        .inner_margin(Margin::same(8))
}

/// Rounded translucent frame behind the text entry field.
pub fn entry_frame() -> Frame {
    Frame::NONE
        .fill(surface_fill())
        .corner_radius(CornerRadius::same(ENTRY_RADIUS))
        .inner_margin(Margin::symmetric(10, 10))
}

/// Font for the entry field, two points below the base size.
pub fn entry_font(config: &UiConfig) -> FontId {
    FontId::new(
        config.font_size.saturating_sub(2).max(1) as f32,
        FontFamily::Proportional,
    )
}

/// Install the visuals and text styles on the context. Called once at
/// startup from the app constructor.
pub fn apply(ctx: &Context, config: &UiConfig) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = Color32::TRANSPARENT;
    style.visuals.panel_fill = Color32::TRANSPARENT;
    style.visuals.override_text_color = Some(Color32::WHITE);
    style.visuals.extreme_bg_color = surface_fill();
    style.visuals.selection.bg_fill = selection_fill();
    style.visuals.widgets.inactive.bg_fill = surface_fill();
    style.visuals.widgets.hovered.bg_fill = selection_fill();
    style.visuals.widgets.active.bg_fill = selection_fill();

    let size = config.font_size as f32;
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(size * 1.4, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(size, FontFamily::Monospace),
    );
    style.text_styles.insert(
        TextStyle::Small,
        FontId::new((size * 0.8).max(8.0), FontFamily::Proportional),
    );

    ctx.set_style(style);
}
