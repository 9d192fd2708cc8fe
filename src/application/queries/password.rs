// src/application/queries/password.rs
use std::sync::Arc;

use crate::application::{
    commands::password::PasswordRuleService, dto::PasswordPolicyDto, error::ApplicationResult,
};
use crate::domain::password::FieldDefinition;

/// Read side of the password rule: the effective policy a client needs to
/// render hints and the strength meter.
pub struct PasswordPolicyQueryService {
    rule: Arc<PasswordRuleService>,
}

impl PasswordPolicyQueryService {
    pub fn new(rule: Arc<PasswordRuleService>) -> Self {
        Self { rule }
    }

    pub fn policy_for(&self, field: &FieldDefinition) -> ApplicationResult<PasswordPolicyDto> {
        self.rule.resolve_policy(field).map(PasswordPolicyDto::from)
    }
}
