// src/infrastructure/messages.rs
use crate::application::ports::messages::MessageSink;
use crate::domain::password::Message;
use std::sync::{Mutex, PoisonError};

/// Ordered in-memory message queue. One queue per request or form submission.
#[derive(Debug, Default)]
pub struct MessageQueue {
    inner: Mutex<Vec<Message>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued message, leaving the queue empty.
    pub fn drain(&self) -> Vec<Message> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageSink for MessageQueue {
    fn enqueue(&self, message: Message) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}
