// src/domain/password/policy.rs
use serde::{Deserialize, Serialize};

use super::coerce::{clamp_threshold, value_to_flag, value_to_int};
use super::params::{
    ComponentParams, METER, MINIMUM_INTEGERS, MINIMUM_LENGTH, MINIMUM_SYMBOLS, MINIMUM_UPPERCASE,
    THRESHOLD,
};

pub const DEFAULT_MINIMUM_LENGTH: u32 = 4;
pub const DEFAULT_STRENGTH_THRESHOLD: u32 = 66;
/// Longer values are reported but still accepted.
pub const ADVISORY_MAX_LENGTH: usize = 99;

/// Thresholds for one validation call. A threshold of zero disables its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub minimum_length: u32,
    pub minimum_integers: u32,
    pub minimum_symbols: u32,
    pub minimum_uppercase: u32,
    pub required: bool,
    pub show_strength_meter: bool,
    pub strength_threshold: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            minimum_integers: 0,
            minimum_symbols: 0,
            minimum_uppercase: 0,
            required: false,
            show_strength_meter: false,
            strength_threshold: DEFAULT_STRENGTH_THRESHOLD,
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum_length(mut self, raw: i64) -> Self {
        self.minimum_length = clamp_threshold(raw);
        self
    }

    pub fn with_minimum_integers(mut self, raw: i64) -> Self {
        self.minimum_integers = clamp_threshold(raw);
        self
    }

    pub fn with_minimum_symbols(mut self, raw: i64) -> Self {
        self.minimum_symbols = clamp_threshold(raw);
        self
    }

    pub fn with_minimum_uppercase(mut self, raw: i64) -> Self {
        self.minimum_uppercase = clamp_threshold(raw);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_strength_meter(mut self, show: bool) -> Self {
        self.show_strength_meter = show;
        self
    }

    pub fn with_strength_threshold(mut self, raw: i64) -> Self {
        self.strength_threshold = clamp_threshold(raw);
        self
    }

    /// Apply component-level parameters. Each present, non-empty entry
    /// replaces the field-level value; `required` is never overridden.
    pub fn with_overrides(self, params: &ComponentParams) -> Self {
        let mut policy = self;
        if let Some(value) = params.get(MINIMUM_LENGTH) {
            policy = policy.with_minimum_length(value_to_int(value));
        }
        if let Some(value) = params.get(MINIMUM_INTEGERS) {
            policy = policy.with_minimum_integers(value_to_int(value));
        }
        if let Some(value) = params.get(MINIMUM_SYMBOLS) {
            policy = policy.with_minimum_symbols(value_to_int(value));
        }
        if let Some(value) = params.get(MINIMUM_UPPERCASE) {
            policy = policy.with_minimum_uppercase(value_to_int(value));
        }
        if let Some(value) = params.get(METER) {
            policy = policy.with_strength_meter(value_to_flag(value));
        }
        if let Some(value) = params.get(THRESHOLD) {
            policy = policy.with_strength_threshold(value_to_int(value));
        }
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.minimum_length, 4);
        assert_eq!(policy.minimum_integers, 0);
        assert_eq!(policy.minimum_symbols, 0);
        assert_eq!(policy.minimum_uppercase, 0);
        assert_eq!(policy.strength_threshold, 66);
        assert!(!policy.required);
    }

    #[test]
    fn negative_minimums_disable_the_check() {
        let policy = PasswordPolicy::new()
            .with_minimum_length(-1)
            .with_minimum_integers(-5);
        assert_eq!(policy.minimum_length, 0);
        assert_eq!(policy.minimum_integers, 0);
    }

    #[test]
    fn non_empty_overrides_win() {
        let params = ComponentParams::new()
            .with(MINIMUM_LENGTH, "12")
            .with(MINIMUM_INTEGERS, 2)
            .with(MINIMUM_UPPERCASE, "")
            .with(METER, "1")
            .with(THRESHOLD, 80);

        let policy = PasswordPolicy::new()
            .with_minimum_uppercase(3)
            .with_required(true)
            .with_overrides(&params);

        assert_eq!(policy.minimum_length, 12);
        assert_eq!(policy.minimum_integers, 2);
        assert_eq!(policy.minimum_uppercase, 3, "empty override keeps field value");
        assert!(policy.show_strength_meter);
        assert_eq!(policy.strength_threshold, 80);
        assert!(policy.required);
    }

    #[test]
    fn zero_override_cannot_lower_a_field_minimum() {
        let params = ComponentParams::new().with(MINIMUM_SYMBOLS, "0");
        let policy = PasswordPolicy::new()
            .with_minimum_symbols(2)
            .with_overrides(&params);
        assert_eq!(policy.minimum_symbols, 2);
    }

    #[test]
    fn negative_override_disables_the_check() {
        let params = ComponentParams::new().with(MINIMUM_LENGTH, -4);
        let policy = PasswordPolicy::new().with_overrides(&params);
        assert_eq!(policy.minimum_length, 0);
    }
}
