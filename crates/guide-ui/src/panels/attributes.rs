//! Attributes page. Example-hero chips open the Heroes page filtered to
//! that attribute.

use egui::{self, RichText, Vec2};
use guide_core::content::{AttributeCard, ATTRIBUTES, ATTRIBUTES_EXPLAINER};
use crate::panels::home::{card, section};
use crate::state::UiAction;
use crate::theme::*;

pub fn attributes_page(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;

    ui.heading(RichText::new("Hero Attributes").color(TEXT_PRIMARY).strong());
    ui.add_space(8.0);

    ui.columns(ATTRIBUTES.len(), |cols| {
        for (col, attr) in cols.iter_mut().zip(ATTRIBUTES.iter()) {
            if let Some(a) = attribute_card(col, attr) {
                action = Some(a);
            }
        }
    });

    section(ui, "Understanding Attributes", |ui| {
        for paragraph in ATTRIBUTES_EXPLAINER {
            ui.label(RichText::new(paragraph).color(TEXT_PRIMARY));
            ui.add_space(4.0);
        }
    });

    action
}

fn attribute_card(ui: &mut egui::Ui, attr: &AttributeCard) -> Option<UiAction> {
    let mut action = None;
    let color = attribute_color(&attr.attribute);

    card(ui, |ui| {
        ui.label(RichText::new(attr.attribute.full_name()).size(20.0).strong().color(color));
        ui.label(RichText::new(attr.description).color(TEXT_PRIMARY));

        ui.add_space(6.0);
        ui.label(RichText::new("Benefits:").strong().color(TEXT_PRIMARY));
        for benefit in attr.benefits {
            ui.label(RichText::new(format!("• {}", benefit)).color(TEXT_SECONDARY));
        }

        ui.add_space(6.0);
        ui.label(RichText::new("Playstyle:").strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(attr.playstyle).color(TEXT_SECONDARY));

        ui.add_space(6.0);
        ui.label(RichText::new("Example Heroes:").strong().color(TEXT_PRIMARY));
        ui.horizontal_wrapped(|ui| {
            for hero in attr.heroes {
                let chip = egui::Button::new(RichText::new(*hero).color(TEXT_PRIMARY).small())
                    .fill(color)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(0.0, 20.0));
                if ui.add(chip).clicked() {
                    action = Some(UiAction::BrowseAttribute(attr.attribute.clone()));
                }
            }
        });
    });

    action
}
