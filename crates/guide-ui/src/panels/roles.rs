//! Roles page.

use egui::{self, RichText};
use guide_core::content::{RoleCard, ROLES, ROLES_EXPLAINER};
use crate::panels::home::{card, section};
use crate::theme::*;

const COLUMNS: usize = 3;

pub fn roles_page(ui: &mut egui::Ui) {
    ui.heading(RichText::new("Hero Roles").color(TEXT_PRIMARY).strong());
    ui.add_space(8.0);

    for row in ROLES.chunks(COLUMNS) {
        ui.columns(COLUMNS, |cols| {
            for (col, role) in cols.iter_mut().zip(row) {
                role_card(col, role);
            }
        });
        ui.add_space(8.0);
    }

    section(ui, "Role Flexibility", |ui| {
        for paragraph in ROLES_EXPLAINER {
            ui.label(RichText::new(paragraph).color(TEXT_PRIMARY));
            ui.add_space(4.0);
        }
    });
}

fn role_card(ui: &mut egui::Ui, role: &RoleCard) {
    card(ui, |ui| {
        ui.label(RichText::new(role.name).size(20.0).strong().color(ACCENT));
        ui.label(RichText::new(role.description).color(TEXT_PRIMARY));

        ui.add_space(6.0);
        ui.label(RichText::new("Key Responsibilities:").strong().color(TEXT_PRIMARY));
        for item in role.responsibilities {
            ui.label(RichText::new(format!("• {}", item)).color(TEXT_SECONDARY));
        }

        ui.add_space(6.0);
        ui.label(RichText::new("Example Heroes:").strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(role.examples.join(", ")).color(TEXT_SECONDARY));
    });
}
