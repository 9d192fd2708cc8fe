// src/domain/password/mod.rs
pub mod charset;
pub mod coerce;
pub mod field;
pub mod messages;
pub mod outcome;
pub mod params;
pub mod policy;

pub use field::FieldDefinition;
pub use messages::MessageKey;
pub use outcome::{Message, Severity, ValidationOutcome};
pub use params::ComponentParams;
pub use policy::PasswordPolicy;
