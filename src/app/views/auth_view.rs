//! Sign-in / sign-up view, the only surface while signed out.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_signup_mode { 320.0 } else { 260.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🗓 Event Organizer")
                    .size(32.0)
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new(if state.is_signup_mode {
                    "Create Account"
                } else {
                    "Ready to Organize? Go Ahead!!"
                })
                .size(22.0)
                .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .text_color(colors::TEXT_PRIMARY),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_PRIMARY),
                );
            });
            ui.add_space(8.0);

            if state.is_signup_mode {
                ui.horizontal(|ui| {
                    ui.add_space(
                        (available_rect.width() - input_width - label_width - 20.0) / 2.0,
                    );
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Confirm:").color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.confirm_password_input)
                            .password(true)
                            .text_color(colors::TEXT_PRIMARY),
                    );
                });
                ui.add_space(8.0);
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit_label = if state.is_signup_mode { "Sign Up" } else { "Sign In" };
                let submit_button = egui::Button::new(
                    egui::RichText::new(submit_label).color(colors::TEXT_ON_PRIMARY),
                )
                .fill(colors::PRIMARY);
                if ui.add_sized([button_width, 32.0], submit_button).clicked() {
                    state.auth_error = None;
                    if state.is_signup_mode {
                        state.handle_sign_up();
                    } else {
                        state.handle_sign_in();
                    }
                }

                ui.add_space(10.0);

                let toggle_label = if state.is_signup_mode {
                    "Back to Sign In"
                } else {
                    "Create Account"
                };
                let toggle_button = egui::Button::new(
                    egui::RichText::new(toggle_label).color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle_button).clicked() {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_SECONDARY));
                    ui.spinner();
                });
            }
        });
    });
}
