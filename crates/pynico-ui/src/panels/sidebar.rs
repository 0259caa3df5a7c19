//! History sidebar: new-chat button, session list, collapse toggle.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use pynico_core::view_model::ChatView;

use crate::state::{UiAction, UiState};
use crate::theme::{palette, PANEL_PADDING, PANEL_ROUNDING};

pub fn history_sidebar(
    ui: &mut egui::Ui,
    view: &ChatView<'_>,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    let p = palette(state.theme);

    egui::Frame::default()
        .fill(p.bg_secondary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let toggle = if state.sidebar_collapsed { "»" } else { "«" };
                if ui.small_button(toggle).clicked() {
                    state.sidebar_collapsed = !state.sidebar_collapsed;
                }
            });

            let label = if state.sidebar_collapsed { "+" } else { "+ Nova Conversa" };
            let new_chat = egui::Button::new(RichText::new(label).color(p.text_primary).strong())
                .fill(p.accent)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 32.0));
            // Disabled until the saved history has been restored
            let ready = view.active_session_id.is_some();
            if ui.add_enabled(ready, new_chat).clicked() {
                actions.push(UiAction::NewChat);
            }

            if state.sidebar_collapsed {
                return;
            }

            ui.add_space(8.0);
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for session in view.summaries() {
                        ui.horizontal(|ui| {
                            let active = view.is_active(&session.id);
                            let title = RichText::new(&session.title).color(if active {
                                p.text_primary
                            } else {
                                p.text_secondary
                            });
                            let row = ui
                                .selectable_label(active, title)
                                .on_hover_text(format!("{} mensagens", session.message_count));
                            if row.clicked() && !active {
                                actions.push(UiAction::SelectSession(session.id.clone()));
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui
                                    .small_button("✕")
                                    .on_hover_text("Excluir conversa")
                                    .clicked()
                                {
                                    actions.push(UiAction::DeleteSession(session.id.clone()));
                                }
                            });
                        });
                    }
                });
        });
}
