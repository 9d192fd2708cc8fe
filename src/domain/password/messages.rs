// src/domain/password/messages.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language keys for every diagnostic the password rule can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    #[serde(rename = "COM_USERS_MSG_PASSWORD_TOO_LONG")]
    PasswordTooLong,
    #[serde(rename = "COM_USERS_MSG_SPACES_IN_PASSWORD")]
    SpacesInPassword,
    #[serde(rename = "COM_USERS_MSG_NOT_ENOUGH_INTEGERS_N")]
    NotEnoughIntegers,
    #[serde(rename = "COM_USERS_MSG_NOT_ENOUGH_SYMBOLS_N")]
    NotEnoughSymbols,
    #[serde(rename = "COM_USERS_MSG_NOT_ENOUGH_UPPERCASE_LETTERS_N")]
    NotEnoughUppercase,
    #[serde(rename = "COM_USERS_MSG_PASSWORD_TOO_SHORT")]
    PasswordTooShort,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::PasswordTooLong,
        MessageKey::SpacesInPassword,
        MessageKey::NotEnoughIntegers,
        MessageKey::NotEnoughSymbols,
        MessageKey::NotEnoughUppercase,
        MessageKey::PasswordTooShort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::PasswordTooLong => "COM_USERS_MSG_PASSWORD_TOO_LONG",
            MessageKey::SpacesInPassword => "COM_USERS_MSG_SPACES_IN_PASSWORD",
            MessageKey::NotEnoughIntegers => "COM_USERS_MSG_NOT_ENOUGH_INTEGERS_N",
            MessageKey::NotEnoughSymbols => "COM_USERS_MSG_NOT_ENOUGH_SYMBOLS_N",
            MessageKey::NotEnoughUppercase => "COM_USERS_MSG_NOT_ENOUGH_UPPERCASE_LETTERS_N",
            MessageKey::PasswordTooShort => "COM_USERS_MSG_PASSWORD_TOO_SHORT",
        }
    }

    /// Keys whose text is picked through plural-form selection.
    pub fn is_plural(&self) -> bool {
        !matches!(
            self,
            MessageKey::PasswordTooLong | MessageKey::SpacesInPassword
        )
    }

    /// The too-long warning is advisory. Every other key accompanies a failure.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, MessageKey::PasswordTooLong)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
