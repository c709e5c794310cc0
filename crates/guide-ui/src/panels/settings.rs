//! Settings panel — backend API base URL.
//! Changes take effect when applied; nothing is persisted across reloads.

use egui::{self, RichText, Vec2};
use guide_types::config::{GuideConfig, DEFAULT_API_BASE};
use crate::state::SaveFeedback;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not applied yet
    Changed,
    /// The user clicked Apply
    ApplyClicked,
    /// The user asked for the built-in defaults
    ResetClicked,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut GuideConfig,
    feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut apply_clicked = false;
    let mut reset_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Backend Section ──────────────────────────────
            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("API Base URL").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::TextEdit::singleline(&mut config.api_base)
                        .hint_text(DEFAULT_API_BASE),
                )
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "Hero data and chat requests go to this server. \
                     Applying starts fresh requests on the next page visit.",
                )
                .color(TEXT_SECONDARY)
                .small()
                .italics(),
            );

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Apply").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(90.0, 28.0)),
                );
                if btn.clicked() {
                    apply_clicked = true;
                }
                if ui.button("Reset").clicked() {
                    reset_clicked = true;
                }

                if let Some(fb) = feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if reset_clicked {
        SettingsAction::ResetClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
