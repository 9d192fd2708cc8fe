// src/domain/password/field.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::coerce::{is_required_flag, is_truthy_flag, loose_int};
use super::policy::PasswordPolicy;

/// Attributes of a password field as declared in a form definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefinition(BTreeMap<String, String>);

impl FieldDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    /// Field-level policy. Absent attributes keep the defaults; present ones
    /// are read loosely, so `minimum_length="abc"` disables the length check.
    pub fn policy(&self) -> PasswordPolicy {
        let mut policy = PasswordPolicy::default()
            .with_required(self.attribute("required").is_some_and(is_required_flag))
            .with_strength_meter(self.attribute("strengthmeter").is_some_and(is_truthy_flag));

        if let Some(raw) = self.attribute("threshold") {
            policy = policy.with_strength_threshold(loose_int(raw));
        }
        if let Some(raw) = self.attribute("minimum_length") {
            policy = policy.with_minimum_length(loose_int(raw));
        }
        if let Some(raw) = self.attribute("minimum_integers") {
            policy = policy.with_minimum_integers(loose_int(raw));
        }
        if let Some(raw) = self.attribute("minimum_symbols") {
            policy = policy.with_minimum_symbols(loose_int(raw));
        }
        if let Some(raw) = self.attribute("minimum_uppercase") {
            policy = policy.with_minimum_uppercase(loose_int(raw));
        }
        policy
    }
}

impl<K, V> FromIterator<(K, V)> for FieldDefinition
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
