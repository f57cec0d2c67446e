// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::SmartIpKeyExtractor,
};

/// One admin write is replenished per client IP every 200 ms (5 per second).
const ADMIN_REPLENISH_MILLIS: u64 = 200;
const ADMIN_BURST: u32 = 10;

fn admin_governor_config() -> GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(ADMIN_REPLENISH_MILLIS);
    builder.burst_size(ADMIN_BURST);
    builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("non-zero rate limit constants")
}

/// Per-IP limiter for the admin write routes. Needs the router to be served
/// with connect info so the peer address is available.
pub fn admin_rate_limit_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    static RATE_LIMITER: OnceLock<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| GovernorLayer::new(admin_governor_config()))
        .clone()
}
