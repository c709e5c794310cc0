//! Main egui application — composes the pages and runs their async work.

use std::rc::Rc;

use chrono::Datelike;
use egui::{self, CentralPanel, ScrollArea, SidePanel, TopBottomPanel};

use guide_core::content::Page;
use guide_core::directory::load_heroes;
use guide_core::event_bus::EventBus;
use guide_core::session::SessionManager;
use guide_core::transport::ChatTransport;
use guide_platform::api::BackendClient;
use guide_types::config::GuideConfig;
use guide_ui::panels::{assistant, attributes, footer, heroes, home, navbar, roles, settings};
use guide_ui::state::{Effect, UiAction, UiState};
use guide_ui::theme;

/// The main application state
pub struct GuideApp {
    ui_state: UiState,
    config: GuideConfig,
    event_bus: EventBus,
    backend: Rc<BackendClient>,
    transport: Rc<ChatTransport>,
    first_frame: bool,
}

impl GuideApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut config = GuideConfig::from_env();
        if let Err(e) = config.validate() {
            log::warn!("{}; falling back to the default backend", e);
            config = GuideConfig::default();
        }
        log::info!("Using backend {}", config.api_base);

        let event_bus = EventBus::new();
        let backend = Rc::new(BackendClient::new(config.clone()));
        let transport = Rc::new(ChatTransport::new(backend.clone(), event_bus.clone()));

        Self {
            ui_state: UiState::new(config.clone()),
            config,
            event_bus,
            backend,
            transport,
            first_frame: true,
        }
    }

    /// Swap in a client for the new base URL. The transport is kept so a
    /// pending chat request still holds its in-flight slot.
    fn rebuild_backend(&mut self) {
        log::info!("Backend changed to {}", self.config.api_base);
        self.backend = Rc::new(BackendClient::new(self.config.clone()));
        self.transport.set_api(self.backend.clone());
    }

    /// Spawn the async work requested by page mounts and chat actions
    fn run_effects(&self, effects: Vec<Effect>, ctx: &egui::Context) {
        for effect in effects {
            let bus = self.event_bus.clone();
            let ctx = ctx.clone();
            match effect {
                Effect::FetchHeroes => {
                    let api = self.backend.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        load_heroes(&*api, &bus).await;
                        ctx.request_repaint();
                    });
                }
                Effect::RegisterSession(session_id) => {
                    let api = self.backend.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        SessionManager::register(session_id, &*api, &bus).await;
                        ctx.request_repaint();
                    });
                }
                Effect::SendMessage(outbound) => {
                    let transport = self.transport.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        transport.exchange(outbound).await;
                        ctx.request_repaint();
                    });
                }
            }
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain results of spawned requests
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        let mut actions: Vec<UiAction> = Vec::new();

        // ── Navigation bar ───────────────────────────────────
        TopBottomPanel::top("navbar").show(ctx, |ui| {
            let current = self.ui_state.page;
            if let Some(action) = navbar::navbar(ui, current, &mut self.ui_state.show_settings) {
                actions.push(action);
            }
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    let state = &mut self.ui_state;
                    match settings::settings_panel(
                        ui,
                        &mut state.config_draft,
                        state.settings_feedback.as_ref(),
                    ) {
                        settings::SettingsAction::ApplyClicked => {
                            if let Some(config) = state.apply_settings() {
                                self.config = config;
                                self.rebuild_backend();
                            }
                        }
                        settings::SettingsAction::ResetClicked => state.reset_settings(),
                        settings::SettingsAction::Changed | settings::SettingsAction::None => {}
                    }
                });
        }

        // ── Footer ───────────────────────────────────────────
        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            let year = chrono::Local::now().year();
            if let Some(action) = footer::footer(ui, year) {
                actions.push(action);
            }
        });

        // ── Page content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.ui_state;
            match state.page {
                Page::Heroes => heroes::heroes_page(ui, &mut state.directory),
                Page::Assistant => {
                    let chat = assistant::assistant_page(
                        ui,
                        &mut state.conversation,
                        state.directory.heroes(),
                    );
                    actions.extend(chat.into_iter().map(UiAction::Chat));
                }
                Page::Home | Page::Attributes | Page::Roles => {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                            let action = match state.page {
                                Page::Home => home::home_page(ui),
                                Page::Attributes => attributes::attributes_page(ui),
                                _ => {
                                    roles::roles_page(ui);
                                    None
                                }
                            };
                            actions.extend(action);
                        });
                }
            }
        });

        if !actions.is_empty() {
            let effects = self.ui_state.perform_all(actions);
            self.run_effects(effects, ctx);
            ctx.request_repaint();
        }
    }
}
