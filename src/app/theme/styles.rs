//! Theme Styling Functions
//!
//! Helper functions for applying the purple light theme consistently
//! across the views.

use eframe::egui::{self, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    style.visuals.panel_fill = colors::BG_LIGHT;

    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::PRIMARY_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    ctx.set_style(style);
}

/// Frame for event cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for the editor form container
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(15))
        .inner_margin(egui::Margin::same(16))
}
