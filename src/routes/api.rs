use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{generation_info, languages, speak};
use crate::state::AppState;
use std::sync::Arc;

/// Create the JSON API router (mounted under `/api`)
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/languages", get(languages::list_languages))
        .route("/speak", post(speak::speak_handler))
        .route(
            "/generation-info",
            get(generation_info::get_generation_info),
        )
        .layer(TraceLayer::new_for_http())
}
