//! Event detail view.
//!
//! A cache-less point read: the event is fetched when the view opens and
//! again every time it regains focus. A read that returns nothing is
//! terminal ("Event not found", no retry). Deletion asks for confirmation
//! first; any authenticated user may delete (authorization is the
//! backend's rule to enforce).

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, event_id: &str) {
    if state.detail.not_found {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.colored_label(
                colors::ERROR,
                egui::RichText::new("Event not found").size(18.0),
            );
        });
        return;
    }

    if state.detail.loading && state.detail.event.is_none() {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 2.0 - 20.0);
            ui.spinner();
        });
        return;
    }

    if let Some(ref error) = state.detail.error {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.colored_label(colors::ERROR, error.clone());
        });
    }

    let Some(event) = state.detail.event.clone() else {
        return;
    };

    let mut edit_clicked = false;
    let mut delete_clicked = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let title = if event.title.trim().is_empty() {
                "Untitled Event"
            } else {
                event.title.as_str()
            };
            ui.colored_label(
                colors::PRIMARY,
                egui::RichText::new(title).size(28.0).strong(),
            );
            let event_type = if event.event_type.trim().is_empty() {
                "General"
            } else {
                event.event_type.as_str()
            };
            ui.colored_label(
                colors::EVENT_TYPE,
                egui::RichText::new(event_type).size(16.0),
            );
        });
        ui.add_space(16.0);

        let formatted_date = event
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let formatted_time = event
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "N/A".to_string());

        render_info_card(ui, "Event Schedule", |ui| {
            ui.colored_label(colors::TEXT_BODY, format!("Date: {}", formatted_date));
            ui.colored_label(colors::TEXT_BODY, format!("Time: {}", formatted_time));
        });

        render_info_card(ui, "Event Description", |ui| {
            let description = if event.description.trim().is_empty() {
                "No description provided."
            } else {
                event.description.as_str()
            };
            ui.colored_label(colors::TEXT_BODY, description);
        });

        render_info_card(ui, "Event Location", |ui| {
            let location = if event.location.trim().is_empty() {
                "Not specified"
            } else {
                event.location.as_str()
            };
            ui.colored_label(colors::TEXT_BODY, format!("Location: {}", location));
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let half = ui.available_width() / 2.0;
                ui.add_space(half - 110.0);

                let edit_button = egui::Button::new(
                    egui::RichText::new("✏ Edit").color(colors::TEXT_ON_PRIMARY),
                )
                .min_size(egui::vec2(100.0, 36.0))
                .fill(colors::EDIT_ACTION);
                if ui.add(edit_button).clicked() {
                    edit_clicked = true;
                }

                ui.add_space(20.0);

                let delete_button = egui::Button::new(
                    egui::RichText::new("🗑 Delete").color(colors::TEXT_ON_PRIMARY),
                )
                .min_size(egui::vec2(100.0, 36.0))
                .fill(colors::ERROR);
                if ui.add(delete_button).clicked() {
                    delete_clicked = true;
                }
            });

            if state.detail.deleting {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
        ui.add_space(16.0);
    });

    if edit_clicked {
        state.navigate_to(AppView::EventEditor {
            event_id: Some(event_id.to_string()),
        });
        return;
    }
    if delete_clicked {
        state.detail.confirm_delete = true;
    }

    render_delete_modal(ui.ctx(), state);
}

fn render_info_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        ui.vertical(|ui| {
            styles::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width() - 20.0);
                ui.colored_label(
                    colors::PRIMARY,
                    egui::RichText::new(title).size(16.0).strong(),
                );
                ui.add_space(6.0);
                add_contents(ui);
            });
        });
        ui.add_space(20.0);
    });
    ui.add_space(8.0);
}

fn render_delete_modal(ctx: &egui::Context, state: &mut AppState) {
    if !state.detail.confirm_delete {
        return;
    }

    egui::Window::new("Delete Event")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this event?");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.detail.confirm_delete = false;
                }
                let delete_button =
                    egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_ON_PRIMARY))
                        .fill(colors::ERROR);
                if ui.add(delete_button).clicked() {
                    state.handle_delete_confirmed();
                }
            });
        });
}
