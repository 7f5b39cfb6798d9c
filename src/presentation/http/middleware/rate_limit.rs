// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitSettings;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-IP limiter. Clients are keyed by forwarding headers when present and
/// by the peer address otherwise, so the server must be started with
/// connect info.
pub fn rate_limit_layer(settings: RateLimitSettings) -> RateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    // period >= 1ms and burst is non-zero, so `finish` always succeeds
    builder.per_millisecond(replenish_interval_ms(settings));
    builder.burst_size(settings.burst.get());
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("valid rate limit configuration");

    GovernorLayer::new(config)
}

fn replenish_interval_ms(settings: RateLimitSettings) -> u64 {
    (1000 / u64::from(settings.per_second.get())).max(1)
}
