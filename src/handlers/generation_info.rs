use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::errors::app_error::AppResult;
use crate::state::AppState;

/// Upstream response relayed verbatim
#[derive(Debug, Serialize)]
pub struct GenerationInfoResponse {
    /// True only when the upstream answered 200
    pub success: bool,
    pub status: u16,
    pub body: String,
}

/// Handler for `GET /api/generation-info`
///
/// Any upstream status is reported inside a 200 response; only a missing
/// credential or a transport failure produce an error status.
pub async fn get_generation_info(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<GenerationInfoResponse>> {
    let info = state.diagnostics.fetch_generation_info().await?;

    Ok(Json(GenerationInfoResponse {
        success: info.is_success(),
        status: info.status,
        body: info.body,
    }))
}
