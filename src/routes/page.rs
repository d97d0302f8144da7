//! Form page route configuration
//!
//! # Endpoints
//!
//! - `GET /` - render the form; `?language=` switches language and placeholder
//! - `POST /play` - synthesize the entered text
//! - `POST /generation-info` - show provider usage metadata

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::page;
use crate::state::AppState;
use std::sync::Arc;

/// Create the form router
pub fn create_page_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page::index))
        .route("/play", post(page::play))
        .route("/generation-info", post(page::generation_info))
        .layer(TraceLayer::new_for_http())
}
