//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};
use guide_types::hero::PrimaryAttribute;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 17, 20);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 31, 36);
pub const BG_SURFACE: Color32 = Color32::from_rgb(48, 48, 54);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 238);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
pub const ACCENT: Color32 = Color32::from_rgb(220, 38, 38);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

pub const STRENGTH: Color32 = Color32::from_rgb(185, 28, 28);
pub const AGILITY: Color32 = Color32::from_rgb(21, 128, 61);
pub const INTELLIGENCE: Color32 = Color32::from_rgb(29, 78, 216);
pub const UNIVERSAL: Color32 = Color32::from_rgb(126, 34, 206);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

pub fn attribute_color(attribute: &PrimaryAttribute) -> Color32 {
    match attribute {
        PrimaryAttribute::Strength => STRENGTH,
        PrimaryAttribute::Agility => AGILITY,
        PrimaryAttribute::Intelligence => INTELLIGENCE,
        PrimaryAttribute::Universal => UNIVERSAL,
        PrimaryAttribute::Unknown => BG_SURFACE,
    }
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.hyperlink_color = ACCENT;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
