// src/application/ports/messages.rs
use crate::domain::password::Message;

/// Receives user-facing diagnostics in the order they were produced.
pub trait MessageSink: Send + Sync {
    fn enqueue(&self, message: Message);
}
