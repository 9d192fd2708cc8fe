// src/application/commands/password/rule.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::messages::MessageSink,
};
use crate::domain::password::{
    FieldDefinition, PasswordPolicy, ValidationOutcome, coerce::value_to_text,
};
use serde_json::Value;

use super::PasswordRuleService;

pub struct ValidatePasswordCommand {
    pub field: FieldDefinition,
    pub value: String,
}

impl ValidatePasswordCommand {
    /// Build a command from a submitted JSON value. Scalars are read as text;
    /// arrays and objects are rejected.
    pub fn from_submission(field: FieldDefinition, value: &Value) -> ApplicationResult<Self> {
        if value.is_array() || value.is_object() {
            return Err(ApplicationError::validation(
                "password value must be a string, number, boolean or null",
            ));
        }

        Ok(Self {
            field,
            value: value_to_text(value),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RuleEvaluation {
    pub policy: PasswordPolicy,
    pub outcome: ValidationOutcome,
}

impl PasswordRuleService {
    /// Field-level policy with the component's parameters applied on top.
    pub fn resolve_policy(&self, field: &FieldDefinition) -> ApplicationResult<PasswordPolicy> {
        let policy = field.policy();

        match self.overrides.params(&self.component)? {
            Some(params) if !params.is_empty() => {
                tracing::trace!(component = %self.component, "applying component password parameters");
                Ok(policy.with_overrides(&params))
            }
            _ => Ok(policy),
        }
    }

    pub fn evaluate(&self, command: &ValidatePasswordCommand) -> ApplicationResult<RuleEvaluation> {
        let policy = self.resolve_policy(&command.field)?;
        let outcome = self.validator.validate(&command.value, &policy);

        tracing::debug!(
            field = command.field.name().unwrap_or("password"),
            valid = outcome.valid,
            messages = outcome.messages.len(),
            "password rule evaluated"
        );

        Ok(RuleEvaluation { policy, outcome })
    }

    /// Run the rule and forward its messages to `sink`. Returns whether the
    /// value passed.
    pub fn test(
        &self,
        command: &ValidatePasswordCommand,
        sink: &dyn MessageSink,
    ) -> ApplicationResult<bool> {
        let RuleEvaluation { outcome, .. } = self.evaluate(command)?;
        for message in outcome.messages {
            sink.enqueue(message);
        }
        Ok(outcome.valid)
    }
}
