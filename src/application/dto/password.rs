// src/application/dto/password.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::commands::password::RuleEvaluation;
use crate::domain::password::{Message, MessageKey, PasswordPolicy, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordPolicyDto {
    pub minimum_length: u32,
    pub minimum_integers: u32,
    pub minimum_symbols: u32,
    pub minimum_uppercase: u32,
    pub required: bool,
    pub show_strength_meter: bool,
    pub strength_threshold: u32,
}

impl From<PasswordPolicy> for PasswordPolicyDto {
    fn from(policy: PasswordPolicy) -> Self {
        Self {
            minimum_length: policy.minimum_length,
            minimum_integers: policy.minimum_integers,
            minimum_symbols: policy.minimum_symbols,
            minimum_uppercase: policy.minimum_uppercase,
            required: policy.required,
            show_strength_meter: policy.show_strength_meter,
            strength_threshold: policy.strength_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Language key, e.g. `COM_USERS_MSG_SPACES_IN_PASSWORD`.
    #[schema(value_type = String)]
    pub key: MessageKey,
    pub text: String,
    #[schema(value_type = String, example = "warning")]
    pub severity: Severity,
    /// `false` for advisory messages that do not fail validation.
    pub blocking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            blocking: message.is_blocking(),
            key: message.key,
            text: message.text,
            severity: message.severity,
            count: message.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationOutcomeDto {
    pub valid: bool,
    pub messages: Vec<MessageDto>,
    pub policy: PasswordPolicyDto,
}

impl From<RuleEvaluation> for ValidationOutcomeDto {
    fn from(evaluation: RuleEvaluation) -> Self {
        Self {
            valid: evaluation.outcome.valid,
            messages: evaluation
                .outcome
                .messages
                .into_iter()
                .map(MessageDto::from)
                .collect(),
            policy: evaluation.policy.into(),
        }
    }
}
