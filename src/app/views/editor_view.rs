//! Event editor: one form for both create and edit mode.
//!
//! Edit mode prefills from a fresh fetch of the event; picking "Other" as
//! the type reveals a free-text field whose value replaces "Other" on
//! submit. Validation is a single message for whichever check fails
//! first.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::shared::event::{OTHER_EVENT_TYPE, STANDARD_EVENT_TYPES};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, event_id: Option<&str>) {
    let edit_mode = event_id.is_some();

    if let Some(ref error) = state.editor.load_error {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::ERROR, error.clone());
        });
        return;
    }

    if state.editor.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 2.0 - 20.0);
            ui.spinner();
        });
        return;
    }

    let mut submit_clicked = false;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    colors::PRIMARY,
                    egui::RichText::new(if edit_mode {
                        "Edit Event"
                    } else {
                        "Create Event"
                    })
                    .size(24.0)
                    .strong(),
                );
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.add_space(40.0);
                ui.vertical(|ui| {
                    styles::form_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width() - 40.0);
                        let input_width = ui.available_width() - 16.0;

                        form_label(ui, "Title");
                        ui.add_sized(
                            [input_width, 28.0],
                            egui::TextEdit::singleline(&mut state.editor.title)
                                .hint_text("Event title")
                                .text_color(colors::TEXT_PRIMARY),
                        );
                        ui.add_space(10.0);

                        form_label(ui, "Description");
                        ui.add_sized(
                            [input_width, 64.0],
                            egui::TextEdit::multiline(&mut state.editor.description)
                                .hint_text("What is this event about?")
                                .text_color(colors::TEXT_PRIMARY),
                        );
                        ui.add_space(10.0);

                        form_label(ui, "Location");
                        ui.add_sized(
                            [input_width, 28.0],
                            egui::TextEdit::singleline(&mut state.editor.location)
                                .hint_text("Where does it take place?")
                                .text_color(colors::TEXT_PRIMARY),
                        );
                        ui.add_space(10.0);

                        form_label(ui, "Event Type");
                        egui::ComboBox::from_id_salt("event_type_picker")
                            .width(input_width)
                            .selected_text(state.editor.event_type.clone())
                            .show_ui(ui, |ui| {
                                for event_type in STANDARD_EVENT_TYPES {
                                    ui.selectable_value(
                                        &mut state.editor.event_type,
                                        event_type.to_string(),
                                        event_type,
                                    );
                                }
                            });
                        ui.add_space(10.0);

                        if state.editor.event_type == OTHER_EVENT_TYPE {
                            form_label(ui, "Custom Type");
                            ui.add_sized(
                                [input_width, 28.0],
                                egui::TextEdit::singleline(&mut state.editor.custom_event_type)
                                    .hint_text("Name the event type")
                                    .text_color(colors::TEXT_PRIMARY),
                            );
                            ui.add_space(10.0);
                        }

                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                form_label(ui, "Date");
                                ui.add_sized(
                                    [140.0, 28.0],
                                    egui::TextEdit::singleline(&mut state.editor.date_input)
                                        .hint_text("YYYY-MM-DD")
                                        .text_color(colors::TEXT_PRIMARY),
                                );
                            });
                            ui.add_space(20.0);
                            ui.vertical(|ui| {
                                form_label(ui, "Time");
                                ui.add_sized(
                                    [100.0, 28.0],
                                    egui::TextEdit::singleline(&mut state.editor.time_input)
                                        .hint_text("HH:MM")
                                        .text_color(colors::TEXT_PRIMARY),
                                );
                            });
                        });
                        ui.add_space(14.0);

                        if let Some(ref error) = state.editor.validation_error {
                            ui.colored_label(colors::ERROR, error.clone());
                            ui.add_space(8.0);
                        }
                        if let Some(ref error) = state.editor.submit_error {
                            ui.colored_label(colors::ERROR, error.clone());
                            ui.add_space(8.0);
                        }

                        ui.vertical_centered(|ui| {
                            let label = if edit_mode {
                                "Update Event"
                            } else {
                                "Create Event"
                            };
                            let submit_button = egui::Button::new(
                                egui::RichText::new(label)
                                    .size(16.0)
                                    .color(colors::TEXT_ON_PRIMARY),
                            )
                            .min_size(egui::vec2(200.0, 38.0))
                            .fill(colors::PRIMARY);
                            if ui
                                .add_enabled(!state.editor.submitting, submit_button)
                                .clicked()
                            {
                                submit_clicked = true;
                            }

                            if state.editor.submitting {
                                ui.add_space(8.0);
                                ui.spinner();
                            }
                        });
                    });
                });
                ui.add_space(40.0);
            });
            ui.add_space(16.0);
        });

    if submit_clicked {
        state.handle_submit();
    }
}

fn form_label(ui: &mut egui::Ui, text: &str) {
    ui.colored_label(
        colors::TEXT_SECONDARY,
        egui::RichText::new(text).size(13.0).strong(),
    );
    ui.add_space(2.0);
}
