use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{FeedbackKind, FeedbackMessage};

/// User-visible notification queue. Services push, the presentation layer
/// drains. Clones share one queue; the crate is single-threaded so the
/// interior mutability is uncontended.
#[derive(Clone, Default)]
pub struct FeedbackSink {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    messages: Vec<FeedbackMessage>,
}

impl FeedbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>, kind: FeedbackKind) {
        let message = message.into();
        match kind {
            FeedbackKind::Error => log::error!("{}", message),
            FeedbackKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.messages.push(FeedbackMessage { id, message, kind });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, FeedbackKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, FeedbackKind::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(message, FeedbackKind::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, FeedbackKind::Info);
    }

    /// Removes and returns everything queued since the last drain.
    pub fn drain(&self) -> Vec<FeedbackMessage> {
        self.inner.borrow_mut().messages.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().messages.is_empty()
    }
}
