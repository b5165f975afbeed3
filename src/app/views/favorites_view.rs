//! Favorites view: the subset of the live list the user has hearted.
//!
//! Pressing the (filled) heart here never un-favorites directly; it
//! raises the shared confirmation prompt.

use eframe::egui;

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
            egui::RichText::new("Favorite Events").size(24.0).strong(),
        );
    });
    ui.add_space(8.0);

    let favorites = state.favorite_events();

    if favorites.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::PLACEHOLDER, "No event is added as a favorite yet!");
        });
        return;
    }

    let mut actions: Vec<(String, CardAction)> = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(4.0);
            for event in &favorites {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        let action = event_card::render(ui, event, true);
                        if action != CardAction::None {
                            actions.push((event.id.clone(), action));
                        }
                    });
                    ui.add_space(16.0);
                });
            }
        });

    for (event_id, action) in actions {
        match action {
            CardAction::Open => {
                state.navigate_to(AppView::EventDetail { event_id });
                return;
            }
            CardAction::FavoritePressed => state.request_remove_favorite(&event_id),
            CardAction::None => {}
        }
    }
}
