// src/infrastructure/mod.rs
pub mod i18n;
pub mod messages;
pub mod params;
