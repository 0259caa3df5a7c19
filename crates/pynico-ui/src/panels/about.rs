//! About window

use egui::{self, RichText};
use crate::theme::Palette;

pub fn about_window(ctx: &egui::Context, p: &Palette, open: &mut bool) {
    egui::Window::new("Sobre o PyNico")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                RichText::new("PyNico é um assistente para quem está aprendendo Python.")
                    .color(p.text_primary),
            );
            ui.label(
                RichText::new(
                    "As respostas são geradas pelo Google Gemini e podem conter erros.",
                )
                .color(p.text_secondary),
            );
            ui.label(
                RichText::new("O histórico de conversas fica salvo apenas neste navegador.")
                    .color(p.text_secondary),
            );
        });
}
