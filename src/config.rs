// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::application::commands::password::DEFAULT_COMPONENT;
use crate::presentation::http::{middleware::rate_limit::RateLimitSettings, routes::RouterOptions};

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    password_component: String,
    params_path: Option<PathBuf>,
    language_overrides_path: Option<PathBuf>,
    rate_limit_enabled: bool,
    rate_limit: RateLimitSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Positive integer from `name`, or `default` when unset.
fn positive_number<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match env::var(name) {
        Ok(raw) => parse_positive(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!("{name} must be a positive integer, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    raw.trim().parse::<T>().ok().filter(|n| *n != T::default())
}

fn optional_path(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let password_component = match env::var("PASSWORD_COMPONENT") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid(
                    "PASSWORD_COMPONENT must not be blank".into(),
                ));
            }
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_COMPONENT.to_string(),
        };

        let rate_limit_enabled = match env::var("RATE_LIMIT_ENABLED") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("RATE_LIMIT_ENABLED must be a boolean, got '{raw}'"))
            })?,
            Err(_) => true,
        };

        let defaults = RateLimitSettings::default();
        let rate_limit = RateLimitSettings {
            replenish_seconds: positive_number(
                "RATE_LIMIT_REPLENISH_SECONDS",
                defaults.replenish_seconds,
            )?,
            burst_size: positive_number("RATE_LIMIT_BURST", defaults.burst_size)?,
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            password_component,
            params_path: optional_path("PASSWORD_PARAMS_PATH"),
            language_overrides_path: optional_path("LANGUAGE_OVERRIDES_PATH"),
            rate_limit_enabled,
            rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Component whose parameters override field-level policy.
    pub fn password_component(&self) -> &str {
        &self.password_component
    }

    pub fn params_path(&self) -> Option<&PathBuf> {
        self.params_path.as_ref()
    }

    pub fn language_overrides_path(&self) -> Option<&PathBuf> {
        self.language_overrides_path.as_ref()
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            rate_limit: self.rate_limit_enabled.then_some(self.rate_limit),
            allowed_origins: self.allowed_origins.clone(),
        }
    }

    /// Location for the OpenAPI snapshot, `OPENAPI_SNAPSHOT_PATH` when set.
    pub fn openapi_snapshot_path_from_env() -> Result<PathBuf, ConfigError> {
        match env::var("OPENAPI_SNAPSHOT_PATH") {
            Ok(value) if value.trim().is_empty() => {
                Err(ConfigError::Missing("OPENAPI_SNAPSHOT_PATH"))
            }
            Ok(value) => Ok(PathBuf::from(value.trim())),
            Err(_) => Ok(PathBuf::from(
                crate::presentation::http::openapi::DEFAULT_SNAPSHOT_PATH,
            )),
        }
    }
}
