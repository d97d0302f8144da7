use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::diagnostics::GenerationInfoClient;
use crate::core::tts::{SpeechSynthesizer, TTSResult, create_tts_provider};

/// Application state that can be shared across handlers
///
/// Everything here is read-only after startup; per-user form state travels
/// with each request.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Speech synthesis engine used by the Play action and `/api/speak`
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Generation info client, holding the credential loaded at startup
    pub diagnostics: GenerationInfoClient,
}

impl AppState {
    /// Build state from configuration, creating the configured TTS provider
    pub fn new(config: ServerConfig) -> TTSResult<Arc<Self>> {
        let synthesizer: Arc<dyn SpeechSynthesizer> =
            Arc::from(create_tts_provider(&config.tts_provider, config.tts_config())?);
        Ok(Self::with_synthesizer(config, synthesizer))
    }

    /// Build state around an existing synthesizer
    pub fn with_synthesizer(
        config: ServerConfig,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Arc<Self> {
        let credential = config.diagnostics_credential();
        if credential.is_none() {
            tracing::warn!("X_API_KEY not configured; generation info will report an error");
        }

        let diagnostics = GenerationInfoClient::new(
            reqwest::Client::new(),
            config.diagnostics_url.clone(),
            credential,
        );

        Arc::new(Self {
            config,
            synthesizer,
            diagnostics,
        })
    }
}
