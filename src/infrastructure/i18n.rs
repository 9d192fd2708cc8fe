// src/infrastructure/i18n.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::i18n::Translator,
};
use once_cell::sync::Lazy;
use std::{collections::HashMap, fs, path::Path};

static EN_GB: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "COM_USERS_MSG_PASSWORD_TOO_LONG",
            "Password is too long. Passwords must be less than 100 characters.",
        ),
        (
            "COM_USERS_MSG_SPACES_IN_PASSWORD",
            "Password must not have spaces at the beginning or end.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_INTEGERS_N_1",
            "Password does not have enough digits. At least 1 digit is required.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_INTEGERS_N_MORE",
            "Password does not have enough digits. At least %d digits are required.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_SYMBOLS_N_1",
            "Password does not have enough symbols (such as !@#$). At least 1 symbol is required.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_SYMBOLS_N_MORE",
            "Password does not have enough symbols (such as !@#$). At least %d symbols are required.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_UPPERCASE_LETTERS_N_1",
            "Password does not have enough uppercase characters. At least 1 uppercase character is required.",
        ),
        (
            "COM_USERS_MSG_NOT_ENOUGH_UPPERCASE_LETTERS_N_MORE",
            "Password does not have enough uppercase characters. At least %d uppercase characters are required.",
        ),
        (
            "COM_USERS_MSG_PASSWORD_TOO_SHORT_1",
            "Password is too short. Passwords must have at least 1 character.",
        ),
        (
            "COM_USERS_MSG_PASSWORD_TOO_SHORT_MORE",
            "Password is too short. Passwords must have at least %d characters.",
        ),
    ])
});

/// Language strings keyed by constant, with optional site overrides.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    overrides: HashMap<String, String>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::en_gb()
    }
}

impl LanguageCatalog {
    pub fn en_gb() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), text.into());
        self
    }

    /// Merge overrides from a flat JSON object of `"KEY": "text"` pairs.
    pub fn with_overrides_file(mut self, path: &Path) -> ApplicationResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to read language file {}: {err}",
                path.display()
            ))
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "invalid language file {}: {err}",
                path.display()
            ))
        })?;

        tracing::info!(path = %path.display(), strings = entries.len(), "loaded language overrides");
        self.overrides.extend(entries);
        Ok(self)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| EN_GB.get(key).copied())
    }
}

/// English plural suffixes, most specific first.
fn plural_suffixes(count: u32) -> &'static [&'static str] {
    match count {
        0 => &["0", "MORE"],
        1 => &["1"],
        _ => &["MORE"],
    }
}

fn substitute(template: &str, count: u32) -> String {
    let count = count.to_string();
    template.replace("%d", &count).replace("%s", &count)
}

impl Translator for LanguageCatalog {
    fn text(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_owned()
    }

    fn plural(&self, key: &str, count: u32) -> String {
        plural_suffixes(count)
            .iter()
            .find_map(|suffix| self.lookup(&format!("{key}_{suffix}")))
            .or_else(|| self.lookup(key))
            .map(|template| substitute(template, count))
            .unwrap_or_else(|| key.to_owned())
    }
}
