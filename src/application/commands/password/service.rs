// src/application/commands/password/service.rs
use std::sync::Arc;

use crate::application::ports::{i18n::Translator, policy::PolicyOverrideProvider};

use super::strength::PasswordStrengthValidator;

/// Component whose parameters override field-level password settings.
pub const DEFAULT_COMPONENT: &str = "com_users";

pub struct PasswordRuleService {
    pub(super) overrides: Arc<dyn PolicyOverrideProvider>,
    pub(super) validator: PasswordStrengthValidator,
    pub(super) component: String,
}

impl PasswordRuleService {
    pub fn new(
        overrides: Arc<dyn PolicyOverrideProvider>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self::for_component(overrides, translator, DEFAULT_COMPONENT)
    }

    pub fn for_component(
        overrides: Arc<dyn PolicyOverrideProvider>,
        translator: Arc<dyn Translator>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            overrides,
            validator: PasswordStrengthValidator::new(translator),
            component: component.into(),
        }
    }
}
