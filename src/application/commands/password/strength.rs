// src/application/commands/password/strength.rs
use std::sync::Arc;

use crate::application::ports::i18n::Translator;
use crate::domain::password::{
    Message, MessageKey, PasswordPolicy, ValidationOutcome,
    charset::{count_digits, count_symbols, count_uppercase, has_edge_whitespace},
    coerce::is_empty_text,
    policy::ADVISORY_MAX_LENGTH,
};

/// Checks a candidate password against a [`PasswordPolicy`].
///
/// Validation is pure: the same value and policy always give the same
/// outcome, and nothing outside the returned [`ValidationOutcome`] changes.
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. an empty value (`""` or `"0"`) passes when the field is optional
/// 2. values longer than 99 bytes get an advisory warning
/// 3. leading or trailing whitespace fails
/// 4. too few digits, then symbols, then uppercase letters fail
/// 5. values shorter than the minimum length fail
#[derive(Clone)]
pub struct PasswordStrengthValidator {
    translator: Arc<dyn Translator>,
}

impl PasswordStrengthValidator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub fn validate(&self, value: &str, policy: &PasswordPolicy) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::valid();

        if !policy.required && is_empty_text(value) {
            return outcome;
        }

        // Length is counted in bytes.
        let length = value.len();

        if length > ADVISORY_MAX_LENGTH {
            outcome.push(self.message(MessageKey::PasswordTooLong));
        }

        // Only the edges are inspected; "ab  cd" passes this check.
        if has_edge_whitespace(value) {
            return outcome.fail(self.message(MessageKey::SpacesInPassword));
        }

        if is_short(policy.minimum_integers, count_digits(value)) {
            return outcome.fail(self.plural(MessageKey::NotEnoughIntegers, policy.minimum_integers));
        }

        if is_short(policy.minimum_symbols, count_symbols(value)) {
            return outcome.fail(self.plural(MessageKey::NotEnoughSymbols, policy.minimum_symbols));
        }

        if is_short(policy.minimum_uppercase, count_uppercase(value)) {
            return outcome.fail(
                self.plural(MessageKey::NotEnoughUppercase, policy.minimum_uppercase),
            );
        }

        if is_short(policy.minimum_length, length) {
            return outcome.fail(self.plural(MessageKey::PasswordTooShort, policy.minimum_length));
        }

        outcome
    }

    fn message(&self, key: MessageKey) -> Message {
        Message::warning(key, self.translator.text(key.as_str()))
    }

    // Plural forms are chosen by the configured minimum, not by how many
    // characters are missing.
    fn plural(&self, key: MessageKey, minimum: u32) -> Message {
        Message::warning(key, self.translator.plural(key.as_str(), minimum)).with_count(minimum)
    }
}

/// A zero minimum never fails.
fn is_short(minimum: u32, found: usize) -> bool {
    minimum > 0 && u32::try_from(found).is_ok_and(|found| found < minimum)
}
