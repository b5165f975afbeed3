//! Dashboard: the live event list.
//!
//! The list is whatever the last feed snapshot delivered, in delivered
//! order (newest first). Cards forward favorite-toggle and open intents;
//! the Create Event action opens the editor in create mode.

use eframe::egui;

use crate::app::feed::FeedStatus;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::AppView;
use crate::app::views::event_card::{self, CardAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Scheduled Events").size(24.0).strong(),
        );
    });
    ui.add_space(8.0);

    // Collect card actions first, apply them after the list is rendered.
    let mut actions: Vec<(String, CardAction)> = Vec::new();

    let bottom_reserve = 64.0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(ui.available_height() - bottom_reserve)
        .show(ui, |ui| {
            ui.add_space(4.0);
            if state.events.is_empty() {
                render_empty_state(ui, state);
            } else {
                for event in &state.events {
                    ui.horizontal(|ui| {
                        ui.add_space(16.0);
                        ui.vertical(|ui| {
                            let is_favorite = state.favorites.contains(&event.id);
                            let action = event_card::render(ui, event, is_favorite);
                            if action != CardAction::None {
                                actions.push((event.id.clone(), action));
                            }
                        });
                        ui.add_space(16.0);
                    });
                }
            }
        });

    for (event_id, action) in actions {
        match action {
            CardAction::Open => {
                state.navigate_to(AppView::EventDetail { event_id });
                return;
            }
            CardAction::FavoritePressed => state.handle_favorite_press(&event_id),
            CardAction::None => {}
        }
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        let create_button = egui::Button::new(
            egui::RichText::new("Create Event")
                .size(18.0)
                .color(colors::TEXT_ON_PRIMARY),
        )
        .min_size(egui::vec2(220.0, 40.0))
        .fill(colors::PRIMARY);
        if ui.add(create_button).clicked() {
            state.navigate_to(AppView::EventEditor { event_id: None });
        }
    });
}

fn render_empty_state(ui: &mut egui::Ui, state: &AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        match state.feed_status {
            Some(FeedStatus::Connecting) | Some(FeedStatus::Retrying) | None => {
                ui.spinner();
                ui.add_space(8.0);
                ui.colored_label(colors::PLACEHOLDER, "Loading events...");
            }
            Some(FeedStatus::Error(ref e)) => {
                ui.colored_label(colors::ERROR, format!("Connection problem: {}", e));
            }
            _ => {
                ui.colored_label(colors::PLACEHOLDER, "No events scheduled yet.");
            }
        }
    });
}
