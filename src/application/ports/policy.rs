// src/application/ports/policy.rs
use crate::application::ApplicationResult;
use crate::domain::password::ComponentParams;

/// Source of application-wide parameters that override field-level policy.
pub trait PolicyOverrideProvider: Send + Sync {
    /// Parameters stored for `component`, or `None` when it has none.
    fn params(&self, component: &str) -> ApplicationResult<Option<ComponentParams>>;
}
