//! Event Card Component
//!
//! One card per event, used by the dashboard and favorites views. The
//! card reports what the user did; the caller applies the state change
//! (collect-then-mutate, so the views never fight the borrow checker).

use eframe::egui;

use crate::app::theme::{colors, styles};
use crate::shared::event::Event;

/// What the user did with a card this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    /// Open the detail view
    Open,
    /// Heart pressed
    FavoritePressed,
}

/// Render a single event card. Returns the action taken, if any.
pub fn render(ui: &mut egui::Ui, event: &Event, is_favorite: bool) -> CardAction {
    let mut action = CardAction::None;

    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new(&event.title).size(18.0).strong(),
                );
                ui.colored_label(colors::EVENT_TYPE, &event.event_type);

                let date = event
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                let time = event
                    .time
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                ui.colored_label(colors::TEXT_SECONDARY, format!("{} at {}", date, time));
                ui.colored_label(colors::TEXT_SECONDARY, &event.location);
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let heart = if is_favorite { "❤" } else { "♡" };
                let heart_button = egui::Button::new(
                    egui::RichText::new(heart).size(20.0).color(colors::HEART),
                )
                .frame(false);
                if ui.add(heart_button).clicked() {
                    action = CardAction::FavoritePressed;
                }

                if ui.button("Details").clicked() {
                    action = CardAction::Open;
                }
            });
        });
    });
    ui.add_space(8.0);

    action
}
