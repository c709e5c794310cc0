//! Site footer. Links without an in-app page render as plain text.

use egui::{self, RichText};
use guide_core::content::{copyright, BRAND, BRAND_BLURB, FOOTER_COLUMNS};
use crate::state::UiAction;
use crate::theme::*;

pub fn footer(ui: &mut egui::Ui, year: i32) -> Option<UiAction> {
    let mut action = None;

    ui.add_space(6.0);
    ui.columns(FOOTER_COLUMNS.len() + 1, |cols| {
        cols[0].label(RichText::new(BRAND).strong().color(ACCENT));
        cols[0].label(RichText::new(BRAND_BLURB).color(TEXT_SECONDARY).small());

        for (col, column) in cols[1..].iter_mut().zip(FOOTER_COLUMNS.iter()) {
            col.label(RichText::new(column.heading).strong().color(TEXT_PRIMARY));
            for link in column.links {
                match link.target {
                    Some(page) => {
                        if col.link(RichText::new(link.label).small()).clicked() {
                            action = Some(UiAction::Navigate(page));
                        }
                    }
                    None => {
                        col.label(RichText::new(link.label).color(TEXT_SECONDARY).small());
                    }
                }
            }
        }
    });

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(copyright(year)).color(TEXT_SECONDARY).small());
    });
    ui.add_space(4.0);

    action
}
