//! Welcome section shown while a session holds only its greeting.

use egui::{self, RichText};
use crate::theme::{Palette, PANEL_ROUNDING};

pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Qual a diferença entre uma lista e uma tupla em Python?",
    "Como funcionam os decoradores? Me dê um exemplo.",
    "Me ajude a entender o que é o 'self' em uma classe.",
    "Crie uma função simples que retorna o fatorial de um número.",
];

/// Returns the example prompt the user clicked, if any.
pub fn welcome_section(ui: &mut egui::Ui, p: &Palette) -> Option<String> {
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(RichText::new("Bem-vindo ao PyNico").color(p.text_primary).strong());
        ui.label(
            RichText::new("Seu mentor de Python. Escolha um exemplo ou faça sua pergunta.")
                .color(p.text_secondary),
        );
        ui.add_space(12.0);

        for prompt in EXAMPLE_PROMPTS {
            let button = egui::Button::new(RichText::new(prompt).color(p.text_primary))
                .fill(p.bg_secondary)
                .corner_radius(PANEL_ROUNDING)
                .min_size(egui::vec2(ui.available_width().min(480.0), 36.0));
            if ui.add(button).clicked() {
                clicked = Some(prompt.to_string());
            }
        }
        ui.add_space(16.0);
    });

    clicked
}
