// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::password::PasswordRuleService,
    ports::{i18n::Translator, policy::PolicyOverrideProvider},
    queries::password::PasswordPolicyQueryService,
};

pub struct ApplicationServices {
    pub password_rule: Arc<PasswordRuleService>,
    pub password_policy: Arc<PasswordPolicyQueryService>,
}

impl ApplicationServices {
    pub fn new(
        overrides: Arc<dyn PolicyOverrideProvider>,
        translator: Arc<dyn Translator>,
        component: impl Into<String>,
    ) -> Self {
        let password_rule = Arc::new(PasswordRuleService::for_component(
            Arc::clone(&overrides),
            Arc::clone(&translator),
            component,
        ));
        let password_policy = Arc::new(PasswordPolicyQueryService::new(Arc::clone(
            &password_rule,
        )));

        Self {
            password_rule,
            password_policy,
        }
    }
}
