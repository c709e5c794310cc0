//! UI-level state that drives rendering.
//!
//! Owns the current page and the per-page state objects from guide-core.
//! Navigation (re)mounts a page and reports the async work it needs as
//! [`Effect`]s; results come back through the EventBus and are folded in
//! by [`UiState::process_events`].

use guide_core::content::Page;
use guide_core::conversation::{ChatAction, Conversation};
use guide_core::directory::HeroDirectory;
use guide_core::session::SessionManager;
use guide_core::transport::Outbound;
use guide_types::{
    config::GuideConfig,
    event::GuideEvent,
    hero::PrimaryAttribute,
    session::SessionId,
};

/// Something a panel asks the state to do
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(Page),
    /// Open the Heroes page restricted to one primary attribute
    BrowseAttribute(PrimaryAttribute),
    Chat(ChatAction),
}

/// Async work for the app layer to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchHeroes,
    RegisterSession(SessionId),
    SendMessage(Outbound),
}

/// Settings feedback shown next to the Apply button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// State visible to UI panels
pub struct UiState {
    pub page: Page,
    /// Hero list for the Heroes page, and the counter picker on the Assistant page
    pub directory: HeroDirectory,
    pub conversation: Conversation,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Editable copy of the active config
    pub config_draft: GuideConfig,
    pub settings_feedback: Option<SaveFeedback>,
}

impl UiState {
    pub fn new(config: GuideConfig) -> Self {
        Self {
            page: Page::Home,
            directory: HeroDirectory::new(),
            conversation: Conversation::new(),
            show_settings: false,
            config_draft: config,
            settings_feedback: None,
        }
    }

    /// Mount `page`. Mounting the current page again re-initialises it.
    pub fn navigate(&mut self, page: Page) -> Vec<Effect> {
        log::info!("Navigating to {}", page.title());
        self.page = page;
        match page {
            Page::Heroes => {
                self.directory = HeroDirectory::new();
                vec![Effect::FetchHeroes]
            }
            Page::Assistant => {
                let session = SessionManager::start();
                let session_id = session.id().clone();
                self.conversation = Conversation::with_session(session);
                self.directory = HeroDirectory::new();
                vec![Effect::RegisterSession(session_id), Effect::FetchHeroes]
            }
            Page::Home | Page::Attributes | Page::Roles => Vec::new(),
        }
    }

    pub fn perform(&mut self, action: UiAction) -> Vec<Effect> {
        match action {
            UiAction::Navigate(page) => self.navigate(page),
            UiAction::BrowseAttribute(attribute) => {
                let effects = self.navigate(Page::Heroes);
                self.directory.set_attribute(Some(attribute));
                effects
            }
            UiAction::Chat(action) => self
                .conversation
                .handle(action)
                .map(Effect::SendMessage)
                .into_iter()
                .collect(),
        }
    }

    pub fn perform_all(&mut self, actions: Vec<UiAction>) -> Vec<Effect> {
        actions.into_iter().flat_map(|a| self.perform(a)).collect()
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<GuideEvent>) {
        for event in &events {
            self.directory.apply(event);
            self.conversation.apply(event);
        }
    }

    /// Validate the draft config. Returns it when it may replace the active one.
    pub fn apply_settings(&mut self) -> Option<GuideConfig> {
        match self.config_draft.validate() {
            Ok(()) => {
                self.settings_feedback = Some(SaveFeedback {
                    message: "Applied".to_string(),
                    success: true,
                });
                Some(self.config_draft.clone())
            }
            Err(e) => {
                log::warn!("Rejected settings: {}", e);
                self.settings_feedback = Some(SaveFeedback {
                    message: e.to_string(),
                    success: false,
                });
                None
            }
        }
    }

    pub fn reset_settings(&mut self) {
        self.config_draft = GuideConfig::default();
        self.settings_feedback = None;
    }

    /// A fetch or reply is pending on the current page
    pub fn is_busy(&self) -> bool {
        match self.page {
            Page::Heroes => self.directory.is_loading(),
            Page::Assistant => self.conversation.is_loading() || self.directory.is_loading(),
            Page::Home | Page::Attributes | Page::Roles => false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(GuideConfig::default())
    }
}
