// src/application/commands/password/mod.rs
mod rule;
mod service;
mod strength;


pub use rule::{RuleEvaluation, ValidatePasswordCommand};
pub use service::{DEFAULT_COMPONENT, PasswordRuleService};
pub use strength::PasswordStrengthValidator;
