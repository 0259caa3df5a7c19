//! Chat panel: transcript of the active session, loading indicator and input.

use egui::{self, RichText, ScrollArea, Vec2};
use pynico_core::view_model::ChatView;
use pynico_types::message::{Message, Role};

use crate::panels::welcome;
use crate::state::{UiAction, UiState};
use crate::theme::{palette, Palette, PANEL_PADDING, PANEL_ROUNDING};

pub fn chat_panel(
    ui: &mut egui::Ui,
    view: &ChatView<'_>,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    let p = palette(state.theme);

    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let available_height = ui.available_height() - 70.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if view.shows_welcome() {
                            if let Some(prompt) = welcome::welcome_section(ui, p) {
                                actions.push(UiAction::Submit(prompt));
                            }
                        }

                        for message in view.messages() {
                            render_message(ui, p, message);
                            ui.add_space(6.0);
                        }

                        if view.is_sending {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("PyNico está digitando...")
                                        .color(p.text_secondary)
                                        .italics(),
                                );
                            });
                        }
                    });

                if let Some(error) = state.last_error.clone() {
                    error_banner(ui, p, &error, state);
                }

                ui.add_space(8.0);
                input_row(ui, p, view.is_sending, state, actions);

                ui.label(
                    RichText::new("PyNico pode cometer erros. Verifique informações importantes.")
                        .color(p.text_secondary)
                        .small(),
                );
            });
        });
}

fn input_row(
    ui: &mut egui::Ui,
    p: &Palette,
    is_sending: bool,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Pergunte algo sobre Python...")
            .desired_width(ui.available_width() - 80.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add_enabled(!is_sending, input);

        let send_enabled = !state.input_text.trim().is_empty() && !is_sending;
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Enviar").color(p.text_primary))
                .fill(if send_enabled { p.accent } else { p.bg_surface })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(70.0, 0.0)),
        );

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (enter_pressed && send_enabled) || send_btn.clicked() {
            actions.push(UiAction::Submit(state.input_text.clone()));
            response.request_focus();
        }
    });
}

fn error_banner(ui: &mut egui::Ui, p: &Palette, error: &str, state: &mut UiState) {
    egui::Frame::default()
        .fill(p.error_bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Não foi possível obter uma resposta: {}", error))
                        .color(p.error),
                );
                if ui.small_button("✕").clicked() {
                    state.dismiss_error();
                }
            });
        });
}

fn render_message(ui: &mut egui::Ui, p: &Palette, message: &Message) {
    let (label, bg) = match message.role {
        Role::User => ("Você", p.user_bubble),
        Role::Model => ("PyNico", p.bg_secondary),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(p.accent).strong().small());
            ui.label(RichText::new(&message.text).color(p.text_primary));
        });
}
