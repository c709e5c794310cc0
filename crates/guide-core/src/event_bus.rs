//! Result queue between spawned requests and the frame loop.
//!
//! Fetch, registration and chat tasks push their outcome here; the app
//! takes the whole queue at the start of each frame. Single-threaded, so
//! clones share one `Rc<RefCell<..>>`.

use std::cell::RefCell;
use std::rc::Rc;
use guide_types::event::GuideEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<Vec<GuideEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: GuideEvent) {
        self.queue.borrow_mut().push(event);
    }

    /// Everything queued since the last call, oldest first.
    pub fn drain(&self) -> Vec<GuideEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}
