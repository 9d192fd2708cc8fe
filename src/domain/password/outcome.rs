// src/domain/password/outcome.rs
use super::messages::MessageKey;
use serde::{Deserialize, Serialize};

/// Message level handed to the notification system. The rule only emits
/// warnings, including for blocking failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: MessageKey,
    pub text: String,
    pub severity: Severity,
    /// Count handed to plural selection, `None` for singular-only keys.
    pub count: Option<u32>,
}

impl Message {
    pub fn warning(key: MessageKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            severity: Severity::Warning,
            count: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.key.is_blocking()
    }
}

/// Result of one validation call. `valid` is authoritative; `messages` are
/// for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub messages: Vec<Message>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            messages: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn fail(mut self, message: Message) -> Self {
        self.valid = false;
        self.messages.push(message);
        self
    }

    pub fn has_message(&self, key: MessageKey) -> bool {
        self.messages.iter().any(|m| m.key == key)
    }

    /// First message that caused the failure, if any.
    pub fn blocking_message(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.is_blocking())
    }
}
