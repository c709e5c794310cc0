//! Landing page.

use egui::{self, RichText, Vec2};
use guide_core::content::*;
use crate::state::UiAction;
use crate::theme::*;

pub fn home_page(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Dota 2").size(40.0).strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(TAGLINE).size(18.0).color(ACCENT));
        ui.add_space(16.0);
    });

    section(ui, INTRO_HEADING, |ui| {
        for paragraph in INTRO {
            ui.label(RichText::new(paragraph).color(TEXT_PRIMARY));
            ui.add_space(4.0);
        }
    });

    section(ui, ASSISTANT_PITCH_HEADING, |ui| {
        ui.label(RichText::new(ASSISTANT_PITCH).color(TEXT_PRIMARY));
        ui.add_space(6.0);
        if accent_button(ui, "Try the AI Assistant").clicked() {
            action = Some(UiAction::Navigate(Page::Assistant));
        }
    });

    ui.add_space(8.0);
    ui.columns(FEATURES.len(), |cols| {
        for (col, feature) in cols.iter_mut().zip(FEATURES.iter()) {
            card(col, |ui| {
                ui.label(RichText::new(feature.title).strong().color(ACCENT));
                ui.label(RichText::new(feature.description).color(TEXT_SECONDARY));
            });
        }
    });

    section(ui, AUTHORS_HEADING, |ui| {
        for paragraph in AUTHORS_INTRO {
            ui.label(RichText::new(paragraph).color(TEXT_PRIMARY));
        }
        ui.add_space(4.0);
        for (name, contribution) in AUTHORS {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(name).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(contribution).color(TEXT_SECONDARY));
            });
        }
        ui.add_space(4.0);
        ui.label(RichText::new(AUTHORS_OUTRO).color(TEXT_PRIMARY));
    });

    section(ui, CALL_TO_ACTION_HEADING, |ui| {
        ui.label(RichText::new(CALL_TO_ACTION).color(TEXT_PRIMARY));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if accent_button(ui, "Explore Heroes").clicked() {
                action = Some(UiAction::Navigate(Page::Heroes));
            }
            if ui.button("Ask the Assistant").clicked() {
                action = Some(UiAction::Navigate(Page::Assistant));
            }
        });
    });

    action
}

/// Headed block on the secondary background; shared by the content pages.
pub fn section(ui: &mut egui::Ui, heading: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(12.0);
    card(ui, |ui| {
        ui.heading(RichText::new(heading).color(TEXT_PRIMARY).strong());
        ui.add_space(4.0);
        body(ui);
    });
}

pub fn card(ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            body(ui);
        });
}

fn accent_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(TEXT_PRIMARY).strong())
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(140.0, 28.0)),
    )
}
