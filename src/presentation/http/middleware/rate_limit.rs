// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type PasswordRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client quota for the password endpoints, keyed by IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Seconds until one request of the burst is replenished.
    pub replenish_seconds: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            replenish_seconds: 5,
            burst_size: 30,
        }
    }
}

/// `None` when the quota is unusable (a zero interval or burst).
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<PasswordRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.replenish_seconds);
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
