// tests/support/mocks.rs
use std::sync::Mutex;

use passrule_core::application::{
    ApplicationResult, error::ApplicationError, ports::policy::PolicyOverrideProvider,
};
use passrule_core::domain::password::ComponentParams;

/// Returns the same parameters for every component and records lookups.
#[derive(Default)]
pub struct StaticParams {
    params: Option<ComponentParams>,
    lookups: Mutex<Vec<String>>,
}

impl StaticParams {
    pub fn new(params: ComponentParams) -> Self {
        Self {
            params: Some(params),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl PolicyOverrideProvider for StaticParams {
    fn params(&self, component: &str) -> ApplicationResult<Option<ComponentParams>> {
        self.lookups.lock().unwrap().push(component.to_string());
        Ok(self.params.clone())
    }
}

/// Simulates an unreachable parameter store.
pub struct FailingParams;

impl PolicyOverrideProvider for FailingParams {
    fn params(&self, _component: &str) -> ApplicationResult<Option<ComponentParams>> {
        Err(ApplicationError::infrastructure("parameter store unavailable"))
    }
}
