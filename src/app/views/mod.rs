//! Views
//!
//! One render function per view, all driven by the central [`AppState`].
//! The session gate lives in [`render_main_panel`]: while the persisted
//! session is resolving only a spinner shows, while signed out the auth
//! view is the only surface, and the app views are reachable only once a
//! session exists.

use eframe::egui;

use crate::app::session::SessionState;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::AppView;

pub mod auth_view;
pub mod dashboard_view;
pub mod detail_view;
pub mod editor_view;
pub mod event_card;
pub mod favorites_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    let frame_style = egui::Frame::default()
        .fill(colors::PRIMARY)
        .inner_margin(egui::Margin::symmetric(12, 10));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                if state.session.is_signed_in() && state.current_view != AppView::Dashboard {
                    if ui.button("⬅ Back").clicked() {
                        state.go_back();
                    }
                }

                ui.colored_label(
                    colors::TEXT_ON_PRIMARY,
                    egui::RichText::new("Event Organizer").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if state.session.is_signed_in() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                            return;
                        }
                        if ui.button("❤ Favorites").clicked()
                            && state.current_view != AppView::Favorites
                        {
                            state.navigate_to(AppView::Favorites);
                        }
                        if let Some(user) = state.session.user() {
                            ui.colored_label(colors::TEXT_ON_PRIMARY, user.email.clone());
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        match &state.session {
            SessionState::Resolving => render_resolving(ui),
            SessionState::SignedOut => auth_view::render(ui, state),
            SessionState::SignedIn(_) => match state.current_view.clone() {
                AppView::Dashboard => dashboard_view::render(ui, state),
                AppView::EventDetail { event_id } => detail_view::render(ui, state, &event_id),
                AppView::EventEditor { event_id } => {
                    editor_view::render(ui, state, event_id.as_deref())
                }
                AppView::Favorites => favorites_view::render(ui, state),
            },
        }
    });

    render_remove_favorite_modal(ctx, state);
}

fn render_resolving(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 20.0);
        ui.spinner();
    });
}

/// Confirmation prompt shared by the dashboard and favorites views:
/// removal is destructive, so the registry entry only goes away on an
/// explicit confirm.
fn render_remove_favorite_modal(ctx: &egui::Context, state: &mut AppState) {
    if state.confirm_remove_favorite.is_none() {
        return;
    }

    egui::Window::new("Remove from Favorites")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to remove this event from your favorites?");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.cancel_favorite_removal();
                }
                let remove_button =
                    egui::Button::new(egui::RichText::new("Remove").color(colors::TEXT_ON_PRIMARY))
                        .fill(colors::ERROR);
                if ui.add(remove_button).clicked() {
                    state.confirm_favorite_removal();
                }
            });
        });
}
