use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::language::Language;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;
use crate::ui::VALIDATION_WARNING;

/// Request body for the speak endpoint
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// The text to synthesize
    pub text: String,
    /// Language name or code; defaults to Bengali
    #[serde(default)]
    pub language: Language,
}

/// Handler for `POST /api/speak`
///
/// Returns the complete MP3 clip as the response body with a download
/// filename of `<language>_speech.mp3`.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakRequest>,
) -> AppResult<Response> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest(VALIDATION_WARNING.to_string()));
    }

    info!(
        "Speak request ({}, {} chars)",
        request.language.code(),
        request.text.chars().count()
    );

    let clip = state
        .synthesizer
        .synthesize(&request.text, request.language)
        .await?;

    let filename = request.language.download_filename(clip.format.extension());
    let disposition = format!("attachment; filename=\"{filename}\"");

    Ok((
        [
            (header::CONTENT_TYPE, clip.format.mime_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        clip.data,
    )
        .into_response())
}
