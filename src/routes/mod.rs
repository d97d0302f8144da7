pub mod api;
pub mod page;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::state::AppState;

/// Assemble every route with shared state and security headers.
///
/// Rate limiting needs the peer address; see [`with_rate_limit`].
pub fn create_router(state: Arc<AppState>) -> Router {
    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ));

    Router::new()
        .route("/health", get(handlers::api::health_check))
        .merge(page::create_page_router())
        .nest("/api", api::create_api_router())
        .with_state(state)
        .layer(security_headers)
}

/// Time for one request slot to come back at `requests_per_second`
pub fn replenish_interval(requests_per_second: u32) -> Duration {
    Duration::from_secs(1) / requests_per_second.max(1)
}

/// Wrap `router` in a per-IP limiter allowing `requests_per_second` sustained
/// and `burst_size` at once.
///
/// Clients are keyed on forwarding headers first, then the peer address, so
/// the router must be served with connect info. Returns `None` when governor
/// rejects the settings (a zero burst).
pub fn with_rate_limit(
    router: Router,
    requests_per_second: u32,
    burst_size: u32,
) -> Option<Router> {
    let limiter = GovernorConfigBuilder::default()
        .period(replenish_interval(requests_per_second))
        .burst_size(burst_size)
        .key_extractor(SmartIpKeyExtractor)
        .finish()?;

    tracing::info!("Rate limiting: {requests_per_second} req/s, burst {burst_size}");
    Some(router.layer(GovernorLayer::new(limiter)))
}
