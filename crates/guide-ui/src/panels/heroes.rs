//! Heroes page — search box, role chips, grid/list views and hero detail.
//!
//! All interaction here is local to the directory; nothing on this page
//! talks to the network after the mount fetch.

use egui::{self, Align2, FontId, RichText, ScrollArea, Sense, Vec2};
use guide_core::directory::{HeroDirectory, LoadStatus, ViewMode, POPULAR_ROLES};
use guide_types::hero::{Hero, PrimaryAttribute};
use crate::theme::*;

const CARD_WIDTH: f32 = 170.0;

pub fn heroes_page(ui: &mut egui::Ui, dir: &mut HeroDirectory) {
    ui.heading(RichText::new("Dota 2 Heroes").color(TEXT_PRIMARY).strong());
    ui.add_space(6.0);

    match &dir.status {
        LoadStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading heroes...").color(TEXT_SECONDARY));
            });
            return;
        }
        LoadStatus::Failed(message) => {
            ui.label(RichText::new(message).color(ERROR));
            return;
        }
        LoadStatus::Ready(_) => {}
    }

    toolbar(ui, dir);
    role_chips(ui, dir);
    ui.add_space(6.0);

    if let Some(summary) = dir.summary() {
        ui.label(RichText::new(summary).color(TEXT_SECONDARY).small());
    }

    if let Some(hero) = dir.selected_hero() {
        let id = hero.id;
        if hero_detail(ui, hero) {
            dir.select(id);
        }
        ui.add_space(8.0);
    }

    let clicked = {
        let heroes = dir.filtered();
        if heroes.is_empty() {
            ui.label(RichText::new("No heroes found matching your criteria.").color(TEXT_SECONDARY));
            None
        } else {
            match dir.view {
                ViewMode::Grid => hero_grid(ui, &heroes),
                ViewMode::List => hero_list(ui, &heroes),
            }
        }
    };
    if let Some(id) = clicked {
        dir.select(id);
    }
}

fn toolbar(ui: &mut egui::Ui, dir: &mut HeroDirectory) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut dir.query)
                .hint_text("Search heroes by name or role...")
                .desired_width(280.0),
        );
        if !dir.query.is_empty() && ui.small_button("✕").clicked() {
            dir.set_query("");
        }

        ui.separator();
        if ui.selectable_label(dir.view == ViewMode::Grid, "Grid").clicked() {
            dir.set_view(ViewMode::Grid);
        }
        if ui.selectable_label(dir.view == ViewMode::List, "List").clicked() {
            dir.set_view(ViewMode::List);
        }

        ui.separator();
        let current = dir
            .attribute
            .as_ref()
            .map(|a| a.full_name())
            .unwrap_or("All attributes");
        let mut chosen = None;
        egui::ComboBox::from_id_salt("attribute_filter")
            .selected_text(current)
            .show_ui(ui, |ui| {
                if ui.selectable_label(dir.attribute.is_none(), "All attributes").clicked() {
                    chosen = Some(None);
                }
                for attr in PrimaryAttribute::all() {
                    let selected = dir.attribute.as_ref() == Some(attr);
                    if ui.selectable_label(selected, attr.full_name()).clicked() {
                        chosen = Some(Some(attr.clone()));
                    }
                }
            });
        if let Some(attribute) = chosen {
            dir.set_attribute(attribute);
        }
    });
}

fn role_chips(ui: &mut egui::Ui, dir: &mut HeroDirectory) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Popular roles:").color(TEXT_SECONDARY).small());
        for role in POPULAR_ROLES {
            if ui.selectable_label(dir.query == role, role).clicked() {
                dir.click_role(role);
            }
        }
    });
}

/// Returns the id of a clicked hero
fn hero_grid(ui: &mut egui::Ui, heroes: &[&Hero]) -> Option<u32> {
    let mut clicked = None;
    let columns = ((ui.available_width() / (CARD_WIDTH + 8.0)) as usize).max(1);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("hero_grid")
                .spacing(Vec2::new(8.0, 8.0))
                .show(ui, |ui| {
                    for (i, hero) in heroes.iter().enumerate() {
                        if hero_card(ui, hero) {
                            clicked = Some(hero.id);
                        }
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    clicked
}

fn hero_card(ui: &mut egui::Ui, hero: &Hero) -> bool {
    let response = egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical_centered(|ui| {
                avatar(ui, hero, 48.0);
                ui.label(RichText::new(hero.display_name()).strong().color(TEXT_PRIMARY));
                ui.label(
                    RichText::new(hero.primary_attr.full_name())
                        .color(attribute_color(&hero.primary_attr))
                        .small(),
                );
                role_badges(ui, &hero.roles, 2);
            });
        })
        .response
        .interact(Sense::click());

    response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}

fn hero_list(ui: &mut egui::Ui, heroes: &[&Hero]) -> Option<u32> {
    let mut clicked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for hero in heroes {
                let response = egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(PANEL_PADDING)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            avatar(ui, hero, 36.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(hero.display_name()).strong().color(TEXT_PRIMARY));
                                ui.label(
                                    RichText::new(format!(
                                        "{} • {}",
                                        hero.primary_attr.full_name(),
                                        hero.attack_type.label()
                                    ))
                                    .color(TEXT_SECONDARY)
                                    .small(),
                                );
                            });
                            role_badges(ui, &hero.roles, 3);
                        });
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    clicked = Some(hero.id);
                }
                ui.add_space(4.0);
            }
        });

    clicked
}

/// Returns true when the detail view should be closed
fn hero_detail(ui: &mut egui::Ui, hero: &Hero) -> bool {
    let mut close = false;

    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, hero, 64.0);
                ui.vertical(|ui| {
                    ui.heading(RichText::new(hero.display_name()).color(TEXT_PRIMARY).strong());
                    ui.label(RichText::new(&hero.name).color(TEXT_SECONDARY).small().monospace());
                    ui.label(
                        RichText::new(format!("Primary attribute: {}", hero.primary_attr))
                            .color(attribute_color(&hero.primary_attr)),
                    );
                    ui.label(
                        RichText::new(format!("Attack type: {}", hero.attack_type.label()))
                            .color(TEXT_PRIMARY),
                    );
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("Roles:").color(TEXT_PRIMARY));
                        role_badges(ui, &hero.roles, hero.roles.len());
                    });
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
        });

    close
}

/// Circle with the hero's initials in its attribute colour
fn avatar(ui: &mut egui::Ui, hero: &Hero, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, attribute_color(&hero.primary_attr));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        hero.initials(),
        FontId::proportional(size * 0.4),
        TEXT_PRIMARY,
    );
}

fn role_badges(ui: &mut egui::Ui, roles: &[String], limit: usize) {
    ui.horizontal_wrapped(|ui| {
        for role in roles.iter().take(limit) {
            egui::Frame::default()
                .stroke(egui::Stroke::new(1.0, BG_SURFACE))
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(Vec2::new(4.0, 1.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(role).color(TEXT_SECONDARY).small());
                });
        }
    });
}
