//! Light and dark palettes

use egui::{Color32, CornerRadius, Stroke, Vec2, Visuals};
use pynico_types::theme::Theme;

pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub user_bubble: Color32,
    pub error: Color32,
    pub error_bg: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(15, 23, 42),
    bg_secondary: Color32::from_rgb(30, 41, 59),
    bg_surface: Color32::from_rgb(51, 65, 85),
    text_primary: Color32::from_rgb(241, 245, 249),
    text_secondary: Color32::from_rgb(148, 163, 184),
    accent: Color32::from_rgb(37, 99, 235),
    user_bubble: Color32::from_rgb(29, 78, 216),
    error: Color32::from_rgb(248, 113, 113),
    error_bg: Color32::from_rgb(69, 26, 26),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(249, 250, 251),
    bg_secondary: Color32::from_rgb(229, 231, 235),
    bg_surface: Color32::from_rgb(255, 255, 255),
    text_primary: Color32::from_rgb(15, 23, 42),
    text_secondary: Color32::from_rgb(75, 85, 99),
    accent: Color32::from_rgb(37, 99, 235),
    user_bubble: Color32::from_rgb(219, 234, 254),
    error: Color32::from_rgb(185, 28, 28),
    error_bg: Color32::from_rgb(254, 226, 226),
};

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

/// Apply a theme to an egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let p = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals = if theme.is_dark() { Visuals::dark() } else { Visuals::light() };
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_surface;

    style.visuals.widgets.inactive.bg_fill = p.bg_secondary;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = p.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.text_primary);

    style.visuals.selection.bg_fill = p.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, p.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
