pub mod password;

pub use password::{MessageDto, PasswordPolicyDto, ValidationOutcomeDto};
