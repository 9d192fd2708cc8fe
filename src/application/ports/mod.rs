// src/application/ports/mod.rs
pub mod i18n;
pub mod messages;
pub mod policy;
