// src/application/ports/i18n.rs

/// Localised text lookup keyed by language constants.
pub trait Translator: Send + Sync {
    fn text(&self, key: &str) -> String;

    /// Text for `key` in the plural form matching `count`.
    fn plural(&self, key: &str, count: u32) -> String;
}
