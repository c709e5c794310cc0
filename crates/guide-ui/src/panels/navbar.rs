//! Top navigation bar — brand, page links, settings toggle.

use egui::{self, Align, Layout, RichText};
use guide_core::content::{Page, BRAND};
use crate::state::UiAction;
use crate::theme::*;

pub fn navbar(ui: &mut egui::Ui, current: Page, show_settings: &mut bool) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Label::new(RichText::new(BRAND).strong().color(ACCENT).size(18.0))
                .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            action = Some(UiAction::Navigate(Page::Home));
        }
        ui.separator();

        for page in Page::nav() {
            let text = RichText::new(page.title()).color(if *page == current {
                TEXT_PRIMARY
            } else {
                TEXT_SECONDARY
            });
            if ui.selectable_label(*page == current, text).clicked() {
                action = Some(UiAction::Navigate(*page));
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.selectable_label(*show_settings, "Settings").clicked() {
                *show_settings = !*show_settings;
            }
        });
    });

    action
}
