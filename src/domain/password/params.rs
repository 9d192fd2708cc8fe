// src/domain/password/params.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coerce::is_empty_value;

pub const MINIMUM_LENGTH: &str = "minimum_length";
pub const MINIMUM_INTEGERS: &str = "minimum_integers";
pub const MINIMUM_SYMBOLS: &str = "minimum_symbols";
pub const MINIMUM_UPPERCASE: &str = "minimum_uppercase";
pub const METER: &str = "meter";
pub const THRESHOLD: &str = "threshold";

/// Application-wide parameters of one component (for example `com_users`).
///
/// Values are kept untyped; empty entries are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentParams(Map<String, Value>);

impl ComponentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(DomainError::InvalidParams(format!(
                "component parameters must be an object, got {other}"
            ))),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Value for `key` when present and not empty.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !is_empty_value(value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
