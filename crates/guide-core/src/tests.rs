#[cfg(test)]
mod tests {
    use crate::event_bus::EventBus;
    use crate::directory::*;
    use crate::session::SessionManager;
    use crate::transport::{ChatTransport, Outbound};
    use crate::conversation::*;
    use crate::content;
    use crate::ports::*;
    use guide_types::{
        GuideError,
        api::*,
        event::GuideEvent,
        hero::*,
        message::Role,
        session::{SessionId, SessionStatus},
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use async_trait::async_trait;
    use futures::FutureExt;
    use futures::channel::oneshot;

    // Mocks resolve immediately, except the gated one which is only
    // block_on'd after its gate is released.
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::task::{Context, Poll, Wake, Waker};
        use std::sync::Arc;

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    // ─── Fixtures ────────────────────────────────────────────

    fn hero(id: u32, name: &str, attr: PrimaryAttribute, roles: &[&str]) -> Hero {
        Hero {
            id,
            name: format!("npc_dota_hero_{}", name.to_lowercase().replace(' ', "_")),
            localized_name: name.to_string(),
            primary_attr: attr,
            attack_type: AttackType::Melee,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn sample_heroes() -> Vec<Hero> {
        vec![
            hero(2, "Axe", PrimaryAttribute::Strength, &["Initiator", "Durable"]),
            hero(25, "Lina", PrimaryAttribute::Intelligence, &["Nuker", "Support"]),
            hero(1, "Anti-Mage", PrimaryAttribute::Agility, &["Carry", "Escape"]),
            hero(14, "Pudge", PrimaryAttribute::Strength, &["Disabler", "Initiator"]),
        ]
    }

    fn names(heroes: &[&Hero]) -> Vec<String> {
        heroes.iter().map(|h| h.display_name().to_string()).collect()
    }

    /// Mock hero API returning a fixed list or an error
    struct MockHeroApi {
        result: guide_types::Result<Vec<Hero>>,
    }

    #[async_trait(?Send)]
    impl HeroApiPort for MockHeroApi {
        async fn fetch_heroes(&self) -> guide_types::Result<Vec<Hero>> {
            self.result.clone()
        }
    }

    /// Mock chat API that records every request
    struct MockChatApi {
        reply: guide_types::Result<String>,
        session_ok: bool,
        sent: RefCell<Vec<ChatMessageRequest>>,
        sessions: RefCell<Vec<SessionId>>,
    }

    impl MockChatApi {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                session_ok: true,
                sent: RefCell::new(Vec::new()),
                sessions: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: GuideError) -> Self {
            Self {
                reply: Err(err),
                session_ok: false,
                sent: RefCell::new(Vec::new()),
                sessions: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatApiPort for MockChatApi {
        async fn create_session(
            &self,
            req: &CreateSessionRequest,
        ) -> guide_types::Result<serde_json::Value> {
            self.sessions.borrow_mut().push(req.session_id.clone());
            if self.session_ok {
                Ok(serde_json::json!({ "status": "ok" }))
            } else {
                Err(GuideError::Network("connection refused".to_string()))
            }
        }

        async fn send_message(
            &self,
            req: &ChatMessageRequest,
        ) -> guide_types::Result<ChatMessageResponse> {
            self.sent.borrow_mut().push(req.clone());
            self.reply.clone().map(|reply| ChatMessageResponse {
                reply,
                is_related: Some(true),
            })
        }
    }

    /// Mock chat API whose reply waits on a oneshot, to hold a request open
    struct GatedChatApi {
        gate: RefCell<Option<oneshot::Receiver<String>>>,
        calls: RefCell<usize>,
    }

    #[async_trait(?Send)]
    impl ChatApiPort for GatedChatApi {
        async fn create_session(
            &self,
            _req: &CreateSessionRequest,
        ) -> guide_types::Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }

        async fn send_message(
            &self,
            _req: &ChatMessageRequest,
        ) -> guide_types::Result<ChatMessageResponse> {
            *self.calls.borrow_mut() += 1;
            let rx = self.gate.borrow_mut().take();
            let reply = match rx {
                Some(rx) => rx.await.map_err(|_| GuideError::Network("gate dropped".to_string()))?,
                None => "ungated".to_string(),
            };
            Ok(ChatMessageResponse { reply, is_related: None })
        }
    }

    fn session_conversation(id: &str) -> Conversation {
        Conversation::with_session(SessionManager::with_id(SessionId::from(id)))
    }

    /// Drive one outbound through a transport and fold the result back in.
    fn round_trip(conv: &mut Conversation, transport: &ChatTransport, outbound: Outbound) {
        let event = block_on(transport.exchange(outbound));
        conv.apply(&event);
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
        bus.emit(GuideEvent::HeroesFailed { message: "x".to_string() });
        bus.emit(GuideEvent::HeroesLoaded { heroes: vec![] });
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GuideEvent::HeroesFailed { .. }));
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();
        bus1.emit(GuideEvent::HeroesLoaded { heroes: vec![] });
        assert_eq!(bus2.drain().len(), 1);
        assert!(bus1.drain().is_empty());
    }

    // ─── Hero Filter Tests ───────────────────────────────────

    #[test]
    fn test_filter_by_role_substring() {
        let heroes = vec![
            hero(2, "Axe", PrimaryAttribute::Strength, &["Initiator", "Durable"]),
            hero(25, "Lina", PrimaryAttribute::Intelligence, &["Nuker", "Support"]),
        ];
        assert_eq!(names(&filter_heroes(&heroes, "nuk")), vec!["Lina"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let heroes = sample_heroes();
        let upper = names(&filter_heroes(&heroes, "CARRY"));
        let lower = names(&filter_heroes(&heroes, "carry"));
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["Anti-Mage"]);
    }

    #[test]
    fn test_filter_by_name() {
        let heroes = sample_heroes();
        assert_eq!(names(&filter_heroes(&heroes, "pud")), vec!["Pudge"]);
    }

    #[test]
    fn test_filter_is_union_of_name_and_roles() {
        let heroes = vec![
            hero(1, "Support Hero", PrimaryAttribute::Universal, &["Carry"]),
            hero(2, "Lion", PrimaryAttribute::Intelligence, &["Support"]),
            hero(3, "Sven", PrimaryAttribute::Strength, &["Carry"]),
        ];
        assert_eq!(names(&filter_heroes(&heroes, "support")), vec!["Support Hero", "Lion"]);
    }

    #[test]
    fn test_filter_empty_query_matches_all() {
        let heroes = sample_heroes();
        assert_eq!(filter_heroes(&heroes, "").len(), heroes.len());
    }

    #[test]
    fn test_filter_no_match() {
        let heroes = sample_heroes();
        assert!(filter_heroes(&heroes, "jungler").is_empty());
    }

    // ─── HeroDirectory Tests ─────────────────────────────────

    #[test]
    fn test_directory_initial_state() {
        let dir = HeroDirectory::new();
        assert!(dir.is_loading());
        assert!(dir.heroes().is_empty());
        assert!(dir.filtered().is_empty());
        assert_eq!(dir.view, ViewMode::Grid);
        assert!(dir.summary().is_none());
    }

    #[test]
    fn test_directory_apply_loaded() {
        let mut dir = HeroDirectory::new();
        dir.apply(&GuideEvent::HeroesLoaded { heroes: sample_heroes() });
        assert!(!dir.is_loading());
        assert_eq!(dir.heroes().len(), 4);
        assert_eq!(dir.filtered().len(), 4);
    }

    #[test]
    fn test_directory_apply_failed_suppresses_list() {
        let mut dir = HeroDirectory::new();
        dir.apply(&GuideEvent::HeroesFailed { message: LOAD_ERROR.to_string() });
        assert_eq!(dir.status, LoadStatus::Failed(LOAD_ERROR.to_string()));
        assert!(dir.heroes().is_empty());
    }

    #[test]
    fn test_directory_ignores_chat_events() {
        let mut dir = HeroDirectory::new();
        dir.apply(&GuideEvent::SessionRegistered { session_id: SessionId::from("s") });
        assert!(dir.is_loading());
    }

    #[test]
    fn test_directory_click_role_sets_query() {
        let mut dir = HeroDirectory::new();
        dir.apply(&GuideEvent::HeroesLoaded { heroes: sample_heroes() });
        dir.set_query("something else");
        dir.click_role("Initiator");
        assert_eq!(dir.query, "Initiator");
        assert_eq!(names(&dir.filtered()), vec!["Axe", "Pudge"]);
        assert_eq!(
            dir.summary().as_deref(),
            Some("Showing 2 heroes matching \"Initiator\"")
        );
    }

    #[test]
    fn test_directory_attribute_restriction() {
        let mut dir = HeroDirectory::with_attribute(PrimaryAttribute::Strength);
        dir.apply(&GuideEvent::HeroesLoaded { heroes: sample_heroes() });
        assert_eq!(names(&dir.filtered()), vec!["Axe", "Pudge"]);

        dir.set_query("durable");
        assert_eq!(names(&dir.filtered()), vec!["Axe"]);

        dir.set_attribute(None);
        dir.set_query("");
        assert_eq!(dir.filtered().len(), 4);
    }

    #[test]
    fn test_directory_select_toggles_detail() {
        let mut dir = HeroDirectory::new();
        dir.apply(&GuideEvent::HeroesLoaded { heroes: sample_heroes() });
        dir.select(25);
        assert_eq!(dir.selected_hero().map(|h| h.display_name()), Some("Lina"));
        dir.select(25);
        assert!(dir.selected_hero().is_none());
    }

    #[test]
    fn test_directory_view_mode() {
        let mut dir = HeroDirectory::new();
        dir.set_view(ViewMode::List);
        assert_eq!(dir.view, ViewMode::List);
    }

    #[test]
    fn test_popular_roles_sorted() {
        let mut sorted = POPULAR_ROLES;
        sorted.sort();
        assert_eq!(sorted, POPULAR_ROLES);
    }

    #[test]
    fn test_load_heroes_success_emits_loaded() {
        let bus = EventBus::new();
        let api = MockHeroApi { result: Ok(sample_heroes()) };
        block_on(load_heroes(&api, &bus));
        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], GuideEvent::HeroesLoaded { heroes } if heroes.len() == 4));
    }

    #[test]
    fn test_load_heroes_failure_emits_page_error() {
        let bus = EventBus::new();
        let api = MockHeroApi {
            result: Err(GuideError::Http { status: 503, message: "Service Unavailable".to_string() }),
        };
        block_on(load_heroes(&api, &bus));
        let events = bus.drain();
        assert!(matches!(&events[0], GuideEvent::HeroesFailed { message } if message == LOAD_ERROR));
    }

    // ─── SessionManager Tests ────────────────────────────────

    #[test]
    fn test_session_start_is_pending() {
        let session = SessionManager::start();
        assert_eq!(session.status(), &SessionStatus::Pending);
        assert!(!session.id().as_str().is_empty());
    }

    #[test]
    fn test_session_register_success() {
        let bus = EventBus::new();
        let api = MockChatApi::replying("unused");
        let mut session = SessionManager::with_id(SessionId::from("s-1"));

        let status = block_on(SessionManager::register(session.id().clone(), &api, &bus));
        assert_eq!(status, SessionStatus::Registered);
        assert_eq!(api.sessions.borrow().as_slice(), &[SessionId::from("s-1")]);

        for event in bus.drain() {
            session.apply(&event);
        }
        assert_eq!(session.status(), &SessionStatus::Registered);
    }

    #[test]
    fn test_session_register_failure_keeps_id() {
        let bus = EventBus::new();
        let api = MockChatApi::failing(GuideError::Network("down".to_string()));
        let mut session = SessionManager::with_id(SessionId::from("s-1"));

        let status = block_on(SessionManager::register(session.id().clone(), &api, &bus));
        assert!(matches!(status, SessionStatus::Failed(_)));

        for event in bus.drain() {
            session.apply(&event);
        }
        assert_eq!(session.id(), &SessionId::from("s-1"));
        assert!(matches!(session.status(), SessionStatus::Failed(m) if m.contains("connection refused")));
    }

    #[test]
    fn test_session_ignores_other_session_events() {
        let mut session = SessionManager::with_id(SessionId::from("mine"));
        session.apply(&GuideEvent::SessionRegistered { session_id: SessionId::from("other") });
        assert_eq!(session.status(), &SessionStatus::Pending);
    }

    // ─── ChatTransport Tests ─────────────────────────────────

    fn outbound(message: &str) -> Outbound {
        Outbound {
            session_id: SessionId::from("s-1"),
            request_id: 1,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_transport_success() {
        let bus = EventBus::new();
        let api = Rc::new(MockChatApi::replying("Pick Lion."));
        let transport = ChatTransport::new(api.clone(), bus.clone());

        let event = block_on(transport.exchange(outbound("hi")));
        assert!(matches!(&event, GuideEvent::ReplyReceived { text, .. } if text == "Pick Lion."));
        assert_eq!(api.sent.borrow().len(), 1);
        assert_eq!(api.sent.borrow()[0].message, "hi");
        assert_eq!(api.sent.borrow()[0].session_id, SessionId::from("s-1"));
        assert_eq!(bus.drain().len(), 1);
        assert!(!transport.is_busy());
    }

    #[test]
    fn test_transport_failure_becomes_event() {
        let bus = EventBus::new();
        let api = Rc::new(MockChatApi::failing(GuideError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }));
        let transport = ChatTransport::new(api, bus);

        let event = block_on(transport.exchange(outbound("hi")));
        match event {
            GuideEvent::ReplyFailed { message, request_id, .. } => {
                assert_eq!(request_id, 1);
                assert_eq!(message, "API Error: 500 - Internal Server Error");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!transport.is_busy());
    }

    #[test]
    fn test_transport_rejects_concurrent_exchange() {
        let (tx, rx) = oneshot::channel();
        let api = Rc::new(GatedChatApi {
            gate: RefCell::new(Some(rx)),
            calls: RefCell::new(0),
        });
        let transport = ChatTransport::new(api.clone(), EventBus::new());

        let mut first = Box::pin(transport.exchange(outbound("first")));
        assert!(first.as_mut().now_or_never().is_none());
        assert!(transport.is_busy());

        let second = block_on(transport.exchange(outbound("second")));
        assert!(matches!(&second, GuideEvent::ReplyFailed { message, .. }
            if message == &GuideError::Busy.to_string()));
        assert_eq!(*api.calls.borrow(), 1);

        tx.send("done".to_string()).unwrap();
        let first = block_on(first);
        assert!(matches!(&first, GuideEvent::ReplyReceived { text, .. } if text == "done"));
        assert!(!transport.is_busy());
    }

    #[test]
    fn test_transport_guard_released_when_future_dropped() {
        let (_tx, rx) = oneshot::channel::<String>();
        let api = Rc::new(GatedChatApi {
            gate: RefCell::new(Some(rx)),
            calls: RefCell::new(0),
        });
        let transport = ChatTransport::new(api, EventBus::new());

        let mut pending = Box::pin(transport.exchange(outbound("first")));
        assert!(pending.as_mut().now_or_never().is_none());
        assert!(transport.is_busy());
        drop(pending);
        assert!(!transport.is_busy());
    }

    fn gated(rx: oneshot::Receiver<String>) -> Rc<GatedChatApi> {
        Rc::new(GatedChatApi {
            gate: RefCell::new(Some(rx)),
            calls: RefCell::new(0),
        })
    }

    fn outbound_for(session: &str, message: &str) -> Outbound {
        Outbound {
            session_id: SessionId::from(session),
            request_id: 1,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_transport_new_session_not_blocked_by_old_request() {
        let (tx, rx) = oneshot::channel();
        let api = gated(rx);
        let transport = ChatTransport::new(api.clone(), EventBus::new());

        let mut old = Box::pin(transport.exchange(outbound_for("old", "still waiting")));
        assert!(old.as_mut().now_or_never().is_none());
        assert!(transport.is_busy_for(&SessionId::from("old")));
        assert!(!transport.is_busy_for(&SessionId::from("fresh")));

        let fresh = block_on(transport.exchange(outbound_for("fresh", "hello")));
        assert!(matches!(&fresh, GuideEvent::ReplyReceived { session_id, text, .. }
            if session_id == &SessionId::from("fresh") && text == "ungated"));
        assert_eq!(*api.calls.borrow(), 2);
        assert!(!transport.is_busy_for(&SessionId::from("fresh")));

        tx.send("late".to_string()).unwrap();
        let old = block_on(old);
        assert!(matches!(&old, GuideEvent::ReplyReceived { session_id, .. }
            if session_id == &SessionId::from("old")));
        assert!(!transport.is_busy());
    }

    #[test]
    fn test_transport_set_api_keeps_in_flight_guard() {
        let (tx, rx) = oneshot::channel();
        let first_api = gated(rx);
        let transport = ChatTransport::new(first_api.clone(), EventBus::new());

        let mut pending = Box::pin(transport.exchange(outbound("first")));
        assert!(pending.as_mut().now_or_never().is_none());

        let second_api = Rc::new(MockChatApi::replying("from new backend"));
        transport.set_api(second_api.clone());
        assert!(transport.is_busy());

        let rejected = block_on(transport.exchange(outbound("second")));
        assert!(matches!(&rejected, GuideEvent::ReplyFailed { message, .. }
            if message == &GuideError::Busy.to_string()));
        assert!(second_api.sent.borrow().is_empty());

        tx.send("from old backend".to_string()).unwrap();
        let first = block_on(pending);
        assert!(matches!(&first, GuideEvent::ReplyReceived { text, .. } if text == "from old backend"));
        assert_eq!(*first_api.calls.borrow(), 1);

        let next = block_on(transport.exchange(outbound("third")));
        assert!(matches!(&next, GuideEvent::ReplyReceived { text, .. } if text == "from new backend"));
        assert_eq!(second_api.sent.borrow().len(), 1);
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_initial_state() {
        let conv = Conversation::new();
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].id, "welcome");
        assert_eq!(conv.messages()[0].role, Role::Assistant);
        assert_eq!(conv.messages()[0].content, WELCOME_TEXT);
        assert_eq!(conv.mode(), AssistantMode::Chat);
        assert!(!conv.is_loading());
        assert!(conv.session().is_none());
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_input() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SetInput("Who counters Axe?".to_string()));
        let out = conv.handle(ChatAction::Submit).expect("outbound");

        assert_eq!(out.message, "Who counters Axe?");
        assert_eq!(out.session_id, SessionId::from("s-1"));
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].role, Role::User);
        assert!(conv.input.is_empty());
        assert!(conv.is_loading());
        assert!(!conv.can_send());
    }

    #[test]
    fn test_submit_blank_input_is_ignored() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SetInput("   ".to_string()));
        assert!(conv.handle(ChatAction::Submit).is_none());
        assert_eq!(conv.messages().len(), 1);
        assert!(!conv.is_loading());
    }

    #[test]
    fn test_successful_send_grows_transcript_by_two() {
        let api = Rc::new(MockChatApi::replying("Play Lion."));
        let transport = ChatTransport::new(api, EventBus::new());
        let mut conv = session_conversation("s-1");

        for i in 0..3 {
            let before = conv.messages().len();
            conv.handle(ChatAction::SetInput(format!("question {}", i)));
            let out = conv.handle(ChatAction::Submit).unwrap();
            round_trip(&mut conv, &transport, out);
            assert_eq!(conv.messages().len(), before + 2);
            assert!(!conv.is_loading());
        }
        let last = conv.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "Play Lion.");
    }

    #[test]
    fn test_failed_send_grows_transcript_by_two() {
        let api = Rc::new(MockChatApi::failing(GuideError::Network("offline".to_string())));
        let transport = ChatTransport::new(api, EventBus::new());
        let mut conv = session_conversation("s-1");

        conv.handle(ChatAction::SetInput("hello".to_string()));
        let out = conv.handle(ChatAction::Submit).unwrap();
        round_trip(&mut conv, &transport, out);

        assert_eq!(conv.messages().len(), 3);
        let last = conv.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(
            last.content,
            "Sorry, I encountered an error: Network error: offline. Please try again."
        );
        assert!(!conv.is_loading());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let api = Rc::new(MockChatApi::replying("ok"));
        let transport = ChatTransport::new(api, EventBus::new());
        let mut conv = session_conversation("s-1");
        for _ in 0..4 {
            let out = conv.handle(ChatAction::QuickQuestion(QUICK_QUESTIONS[0].to_string())).unwrap();
            round_trip(&mut conv, &transport, out);
        }
        let mut ids: Vec<&str> = conv.messages().iter().map(|m| m.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_switch_to_pick_submits_fixed_question() {
        for start in AssistantMode::all() {
            let mut conv = session_conversation("s-1");
            if *start == AssistantMode::Pick {
                let out = conv.handle(ChatAction::SwitchMode(AssistantMode::Pick)).unwrap();
                conv.apply(&GuideEvent::ReplyReceived {
                    session_id: out.session_id,
                    request_id: out.request_id,
                    text: "ok".to_string(),
                });
            } else {
                conv.handle(ChatAction::SwitchMode(*start));
            }
            let before = conv.messages().len();

            let out = conv.handle(ChatAction::SwitchMode(AssistantMode::Pick)).expect("outbound");
            assert_eq!(out.message, PICK_QUESTION);
            assert_eq!(conv.messages().len(), before + 1);
            let last = conv.messages().last().unwrap();
            assert_eq!(last.role, Role::User);
            assert_eq!(last.content, "What heroes should I pick in the current meta?");
            assert_eq!(conv.mode(), AssistantMode::Pick);
        }
    }

    #[test]
    fn test_switch_mode_clears_input_and_hero() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SwitchMode(AssistantMode::Counter));
        let out = conv.handle(ChatAction::SelectHero("Pudge".to_string())).unwrap();
        conv.apply(&GuideEvent::ReplyReceived {
            session_id: out.session_id,
            request_id: out.request_id,
            text: "Use Lifestealer.".to_string(),
        });
        conv.handle(ChatAction::SetInput("draft".to_string()));

        let before = conv.messages().len();
        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Chat)).is_none());
        assert!(conv.input.is_empty());
        assert!(conv.selected_hero().is_none());
        assert_eq!(conv.messages().len(), before);
    }

    #[test]
    fn test_switch_to_counter_sends_nothing() {
        let mut conv = session_conversation("s-1");
        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Counter)).is_none());
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.mode(), AssistantMode::Counter);
        assert!(!conv.input_enabled());
    }

    #[test]
    fn test_counter_selection_submits_every_time() {
        let api = Rc::new(MockChatApi::replying("Buy Spirit Vessel."));
        let transport = ChatTransport::new(api.clone(), EventBus::new());
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SwitchMode(AssistantMode::Counter));

        for _ in 0..2 {
            let before = conv.messages().len();
            let out = conv.handle(ChatAction::SelectHero("Pudge".to_string())).unwrap();
            assert_eq!(out.message, "How do I counter Pudge?");
            assert_eq!(conv.messages()[before].content, "How do I counter Pudge?");
            assert_eq!(conv.messages()[before].role, Role::User);
            round_trip(&mut conv, &transport, out);
            assert_eq!(conv.messages().len(), before + 2);
        }
        assert_eq!(api.sent.borrow().len(), 2);
        assert_eq!(conv.selected_hero(), Some("Pudge"));
        assert!(conv.input_enabled());
    }

    #[test]
    fn test_hero_selection_outside_counter_mode_sends_nothing() {
        let mut conv = session_conversation("s-1");
        assert!(conv.handle(ChatAction::SelectHero("Pudge".to_string())).is_none());
        assert_eq!(conv.messages().len(), 1);
    }

    #[test]
    fn test_pick_mode_disables_input() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SwitchMode(AssistantMode::Pick));
        assert!(!conv.input_enabled());
    }

    #[test]
    fn test_send_without_session_does_not_call_endpoint() {
        let mut conv = Conversation::new();
        conv.handle(ChatAction::SetInput("hello".to_string()));
        assert!(!conv.can_send());

        let out = conv.handle(ChatAction::Submit);
        assert!(out.is_none());
        assert!(!conv.is_loading());
        assert_eq!(conv.messages().len(), 3);
        assert_eq!(conv.messages()[1].content, "hello");
        assert_eq!(conv.messages()[2].role, Role::Assistant);
        assert_eq!(conv.messages()[2].content, NO_SESSION_TEXT);
    }

    #[test]
    fn test_quick_question_without_session_gives_feedback() {
        let mut conv = Conversation::new();
        assert!(conv.handle(ChatAction::QuickQuestion("Best warding spots?".to_string())).is_none());
        assert_eq!(conv.messages().last().unwrap().content, NO_SESSION_TEXT);
    }

    #[test]
    fn test_sending_actions_rejected_while_loading() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SetInput("first".to_string()));
        conv.handle(ChatAction::Submit).unwrap();
        let len = conv.messages().len();

        conv.handle(ChatAction::SetInput("second".to_string()));
        assert!(conv.handle(ChatAction::Submit).is_none());
        assert_eq!(conv.input, "second");
        assert!(conv.handle(ChatAction::QuickQuestion("q".to_string())).is_none());
        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Pick)).is_none());
        assert_eq!(conv.mode(), AssistantMode::Chat);

        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Counter)).is_none());
        assert_eq!(conv.mode(), AssistantMode::Counter);
        assert!(conv.handle(ChatAction::SelectHero("Axe".to_string())).is_none());
        assert_eq!(conv.selected_hero(), None);

        assert_eq!(conv.messages().len(), len);
        assert_eq!(conv.notice(), Some(BUSY_NOTICE));
    }

    #[test]
    fn test_silent_mode_switches_allowed_while_loading() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SetInput("first".to_string()));
        conv.handle(ChatAction::Submit).unwrap();
        let len = conv.messages().len();

        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Counter)).is_none());
        assert_eq!(conv.mode(), AssistantMode::Counter);
        assert!(conv.handle(ChatAction::SwitchMode(AssistantMode::Chat)).is_none());
        assert_eq!(conv.mode(), AssistantMode::Chat);

        // Outside Counter mode a selection only records the hero
        assert!(conv.handle(ChatAction::SelectHero("Axe".to_string())).is_none());
        assert_eq!(conv.selected_hero(), Some("Axe"));

        assert_eq!(conv.messages().len(), len);
        assert!(conv.is_loading());
        assert_eq!(conv.notice(), None);

        conv.apply(&GuideEvent::ReplyReceived {
            session_id: SessionId::from("s-1"),
            request_id: 1,
            text: "ok".to_string(),
        });
        let out = conv.handle(ChatAction::SwitchMode(AssistantMode::Pick)).expect("outbound");
        assert_eq!(out.message, PICK_QUESTION);
        assert_eq!(conv.messages().len(), len + 1);
    }

    #[test]
    fn test_reply_for_other_session_is_ignored() {
        let mut conv = session_conversation("s-1");
        conv.handle(ChatAction::SetInput("hi".to_string()));
        conv.handle(ChatAction::Submit).unwrap();

        conv.apply(&GuideEvent::ReplyReceived {
            session_id: SessionId::from("old"),
            request_id: 1,
            text: "stale".to_string(),
        });
        assert_eq!(conv.messages().len(), 2);
        assert!(conv.is_loading());
    }

    #[test]
    fn test_conversation_tracks_registration() {
        let mut conv = session_conversation("s-1");
        assert_eq!(conv.session_status(), Some(&SessionStatus::Pending));
        conv.apply(&GuideEvent::SessionRegistrationFailed {
            session_id: SessionId::from("s-1"),
            message: "down".to_string(),
        });
        assert_eq!(conv.session_status(), Some(&SessionStatus::Failed("down".to_string())));

        // A failed registration does not block chat
        conv.handle(ChatAction::SetInput("still there?".to_string()));
        assert!(conv.can_send());
        assert!(conv.handle(ChatAction::Submit).is_some());
    }

    #[test]
    fn test_attach_session_enables_sending() {
        let mut conv = Conversation::new();
        conv.attach_session(SessionManager::with_id(SessionId::from("late")));
        conv.handle(ChatAction::SetInput("hi".to_string()));
        let out = conv.handle(ChatAction::Submit).unwrap();
        assert_eq!(out.session_id, SessionId::from("late"));
    }

    #[test]
    fn test_mode_placeholders() {
        assert!(AssistantMode::Chat.placeholder().starts_with("Ask about heroes"));
        assert!(AssistantMode::Pick.placeholder().contains("pick recommendations"));
        assert!(AssistantMode::Counter.placeholder().starts_with("Select a hero"));
    }

    // ─── Content Tests ───────────────────────────────────────

    #[test]
    fn test_content_pages() {
        assert_eq!(content::Page::nav().len(), 4);
        assert_eq!(content::Page::Assistant.title(), "AI Assistant");
        assert_eq!(content::FEATURES.len(), 3);
        assert_eq!(content::ROLES.len(), 6);
        assert_eq!(content::ATTRIBUTES[0].attribute, PrimaryAttribute::Strength);
        assert!(content::ATTRIBUTES[0].heroes.contains(&"Pudge"));
    }

    #[test]
    fn test_footer_links() {
        let inert = content::FOOTER_COLUMNS
            .iter()
            .flat_map(|c| c.links.iter())
            .filter(|l| l.target.is_none())
            .count();
        assert_eq!(inert, 7);
        assert_eq!(content::copyright(2026), "© 2026 Dota2Guide. All rights reserved.");
    }
}
