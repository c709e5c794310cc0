//! Assistant page — mode tabs, counter picker, quick questions, transcript
//! and input field.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Vec2};
use guide_core::conversation::{AssistantMode, ChatAction, Conversation, QUICK_QUESTIONS};
use guide_types::{
    hero::Hero,
    message::{Message, Role},
    session::SessionStatus,
};
use crate::theme::*;

/// Render the assistant page. Returns the actions the user took this frame.
pub fn assistant_page(
    ui: &mut egui::Ui,
    conv: &mut Conversation,
    heroes: &[Hero],
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, conv);
                ui.separator();

                mode_tabs(ui, conv, &mut actions);
                if conv.mode() == AssistantMode::Counter {
                    hero_picker(ui, conv, heroes, &mut actions);
                }
                quick_questions(ui, conv, &mut actions);

                if let Some(notice) = conv.notice() {
                    ui.label(RichText::new(notice).color(WARNING).small());
                }
                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in conv.messages() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                        if conv.is_loading() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY).small());
                            });
                        }
                    });

                ui.add_space(8.0);
                input_row(ui, conv, &mut actions);
            });
        });

    actions
}

fn header(ui: &mut egui::Ui, conv: &Conversation) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Dota 2 AI Assistant").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (text, color) = match conv.session_status() {
                Some(SessionStatus::Registered) => ("Connected".to_string(), SUCCESS),
                Some(SessionStatus::Pending) => ("Connecting...".to_string(), WARNING),
                Some(SessionStatus::Failed(e)) => (format!("Session error: {}", e), ERROR),
                None => ("No session".to_string(), ERROR),
            };
            ui.label(RichText::new(text).color(color).small());
        });
    });
}

fn mode_tabs(ui: &mut egui::Ui, conv: &Conversation, actions: &mut Vec<ChatAction>) {
    ui.horizontal(|ui| {
        for mode in AssistantMode::all() {
            if ui.selectable_label(conv.mode() == *mode, mode.label()).clicked() {
                actions.push(ChatAction::SwitchMode(*mode));
            }
        }
    });
}

fn hero_picker(
    ui: &mut egui::Ui,
    conv: &Conversation,
    heroes: &[Hero],
    actions: &mut Vec<ChatAction>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Counter:").color(TEXT_SECONDARY));
        egui::ComboBox::from_id_salt("counter_hero")
            .selected_text(conv.selected_hero().unwrap_or("Select a hero"))
            .width(220.0)
            .show_ui(ui, |ui| {
                for hero in heroes {
                    let name = hero.display_name();
                    if ui
                        .selectable_label(conv.selected_hero() == Some(name), name)
                        .clicked()
                    {
                        actions.push(ChatAction::SelectHero(name.to_string()));
                    }
                }
            });
        if heroes.is_empty() {
            ui.label(RichText::new("Loading heroes...").color(TEXT_SECONDARY).small());
        }
    });
}

fn quick_questions(ui: &mut egui::Ui, conv: &Conversation, actions: &mut Vec<ChatAction>) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Quick questions:").color(TEXT_SECONDARY).small());
        for question in QUICK_QUESTIONS {
            let button = ui.add_enabled(!conv.is_loading(), egui::Button::new(RichText::new(question).small()));
            if button.clicked() {
                actions.push(ChatAction::QuickQuestion(question.to_string()));
            }
        }
    });
}

fn input_row(ui: &mut egui::Ui, conv: &mut Conversation, actions: &mut Vec<ChatAction>) {
    ui.horizontal(|ui| {
        let enabled = conv.input_enabled();
        let hint = conv.mode().placeholder();
        let width = ui.available_width() - 70.0;
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut conv.input)
                .hint_text(hint)
                .desired_width(width)
                .font(egui::FontId::proportional(14.0)),
        );

        let send_enabled = conv.can_send();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (enter && !conv.input.trim().is_empty()) || send_btn.clicked() {
            actions.push(ChatAction::Submit);
            response.request_focus();
        }
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let user_bg = Color32::from_rgb(60, 24, 24);
    let (label_color, bg, layout) = match message.role {
        Role::User => (ACCENT, user_bg, Layout::right_to_left(Align::Min)),
        Role::Assistant => (SUCCESS, BG_SECONDARY, Layout::left_to_right(Align::Min)),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let max_width = ui.available_width() * 0.8;
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(message.role.label()).color(label_color).strong().small());
                        ui.label(RichText::new(message.time_label()).color(TEXT_SECONDARY).small());
                    });
                    ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                });
            });
    });
}
