//! Conversation state — transcript, input, loading flag, assistant mode.
//!
//! Every mutation is a synchronous transition with no I/O. Actions that
//! need the backend return an [`Outbound`] for the caller to hand to the
//! [`ChatTransport`](crate::transport::ChatTransport); the reply comes back
//! later as a `GuideEvent` passed to [`Conversation::apply`].
//!
//! A send always appends two messages: the user's text now, and the reply
//! (or an error stand-in) when the request resolves.

use serde::{Deserialize, Serialize};
use guide_types::{
    event::GuideEvent,
    message::Message,
    session::{SessionId, SessionStatus},
};
use crate::session::SessionManager;
use crate::transport::Outbound;

pub const WELCOME_TEXT: &str = "Hello! I'm your Dota 2 AI Assistant. I can help you with hero picks, counter strategies, and gameplay tips. What would you like to know?";
pub const PICK_QUESTION: &str = "What heroes should I pick in the current meta?";
pub const NO_SESSION_TEXT: &str = "Sorry, there was an issue with my connection (no session). Please try refreshing the page.";
pub const BUSY_NOTICE: &str = "Please wait for the current reply.";

pub const QUICK_QUESTIONS: [&str; 3] = [
    "What's the current meta?",
    "How to improve my last hitting?",
    "Best warding spots?",
];

pub fn counter_question(hero: &str) -> String {
    format!("How do I counter {}?", hero)
}

pub fn error_reply(message: &str) -> String {
    format!("Sorry, I encountered an error: {}. Please try again.", message)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantMode {
    Chat,
    Pick,
    Counter,
}

impl AssistantMode {
    pub fn all() -> &'static [AssistantMode] {
        &[AssistantMode::Chat, AssistantMode::Pick, AssistantMode::Counter]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssistantMode::Chat => "Chat",
            AssistantMode::Pick => "Pick",
            AssistantMode::Counter => "Counter",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AssistantMode::Chat => "Ask about heroes, strategies, or gameplay...",
            AssistantMode::Pick => "Ask for hero pick recommendations...",
            AssistantMode::Counter => {
                "Select a hero above to ask how to counter them, or type a general query."
            }
        }
    }
}

/// User-driven inputs to the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    SetInput(String),
    Submit,
    QuickQuestion(String),
    SwitchMode(AssistantMode),
    SelectHero(String),
}

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    pub input: String,
    loading: bool,
    mode: AssistantMode,
    selected_hero: Option<String>,
    session: Option<SessionManager>,
    /// Transient status line (rejected actions)
    notice: Option<String>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant("welcome", WELCOME_TEXT)],
            input: String::new(),
            loading: false,
            mode: AssistantMode::Chat,
            selected_hero: None,
            session: None,
            notice: None,
            next_id: 0,
        }
    }

    pub fn with_session(session: SessionManager) -> Self {
        Self {
            session: Some(session),
            ..Self::new()
        }
    }

    pub fn attach_session(&mut self, session: SessionManager) {
        self.session = Some(session);
    }

    // ─── Read accessors ─────────────────────────────────────

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> AssistantMode {
        self.mode
    }

    pub fn selected_hero(&self) -> Option<&str> {
        self.selected_hero.as_deref()
    }

    pub fn session(&self) -> Option<&SessionManager> {
        self.session.as_ref()
    }

    pub fn session_status(&self) -> Option<&SessionStatus> {
        self.session.as_ref().map(|s| s.status())
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The text box is locked in Pick mode, and in Counter mode until a
    /// hero is chosen (unless the user has already typed something).
    pub fn input_enabled(&self) -> bool {
        match self.mode {
            AssistantMode::Chat => true,
            AssistantMode::Pick => false,
            AssistantMode::Counter => {
                self.selected_hero.is_some() || !self.input.trim().is_empty()
            }
        }
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty() && self.session.is_some()
    }

    // ─── Transitions ────────────────────────────────────────

    pub fn handle(&mut self, action: ChatAction) -> Option<Outbound> {
        match action {
            ChatAction::SetInput(text) => {
                self.input = text;
                None
            }
            ChatAction::Submit => self.submit_input(),
            ChatAction::QuickQuestion(question) => {
                if self.reject_if_busy() {
                    return None;
                }
                self.submit(question)
            }
            ChatAction::SwitchMode(mode) => self.switch_mode(mode),
            ChatAction::SelectHero(name) => self.select_hero(name),
        }
    }

    /// Fold an async result into the transcript.
    pub fn apply(&mut self, event: &GuideEvent) {
        match event {
            GuideEvent::SessionRegistered { .. }
            | GuideEvent::SessionRegistrationFailed { .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.apply(event);
                }
            }
            GuideEvent::ReplyReceived { session_id, text, .. } => {
                if !self.owns(session_id) {
                    return;
                }
                let id = self.next_message_id();
                self.messages.push(Message::assistant(id, text.clone()));
                self.loading = false;
            }
            GuideEvent::ReplyFailed { session_id, message, .. } => {
                if !self.owns(session_id) {
                    return;
                }
                let id = self.next_message_id();
                self.messages.push(Message::assistant(id, error_reply(message)));
                self.loading = false;
            }
            GuideEvent::HeroesLoaded { .. } | GuideEvent::HeroesFailed { .. } => {}
        }
    }

    fn submit_input(&mut self) -> Option<Outbound> {
        if self.input.trim().is_empty() {
            return None;
        }
        if self.reject_if_busy() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.submit(text)
    }

    /// Only a switch to Pick sends, so only that one waits for the
    /// pending reply; the others always take effect.
    fn switch_mode(&mut self, mode: AssistantMode) -> Option<Outbound> {
        if mode == AssistantMode::Pick && self.reject_if_busy() {
            return None;
        }
        self.mode = mode;
        self.input.clear();
        self.selected_hero = None;

        match mode {
            AssistantMode::Pick => self.submit(PICK_QUESTION.to_string()),
            AssistantMode::Chat | AssistantMode::Counter => None,
        }
    }

    fn select_hero(&mut self, name: String) -> Option<Outbound> {
        if self.mode == AssistantMode::Counter && self.reject_if_busy() {
            return None;
        }
        let question = counter_question(&name);
        self.selected_hero = Some(name);

        if self.mode == AssistantMode::Counter {
            self.submit(question)
        } else {
            None
        }
    }

    /// Append the user's message and, if a session exists, start a request.
    /// Without a session the error stand-in is appended immediately.
    fn submit(&mut self, text: String) -> Option<Outbound> {
        self.notice = None;
        let id = self.next_message_id();
        self.messages.push(Message::user(id, text.clone()));

        let Some(session) = self.session.as_ref() else {
            log::error!("Session ID is not set. Cannot send message.");
            let id = self.next_message_id();
            self.messages.push(Message::assistant(id, NO_SESSION_TEXT));
            return None;
        };

        let session_id = session.id().clone();
        self.loading = true;
        Some(Outbound {
            session_id,
            request_id: self.next_id,
            message: text,
        })
    }

    fn reject_if_busy(&mut self) -> bool {
        if self.loading {
            log::warn!("Action ignored while a reply is pending");
            self.notice = Some(BUSY_NOTICE.to_string());
        }
        self.loading
    }

    fn owns(&self, session_id: &SessionId) -> bool {
        match &self.session {
            Some(session) if session.id() == session_id => true,
            _ => {
                log::debug!("Dropping reply for stale session {}", session_id);
                false
            }
        }
    }

    fn next_message_id(&mut self) -> String {
        self.next_id += 1;
        format!("msg-{}", self.next_id)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
