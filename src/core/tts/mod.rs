mod base;
pub mod google;

pub use base::{AudioClip, AudioFormat, SpeechSynthesizer, TTSError, TTSResult};
pub use google::{GoogleTranslateTTS, GoogleTranslateTTSConfig, SpeechSpeed};

/// Factory function to create a speech synthesizer.
///
/// # Supported Providers
///
/// - `"google"` or `"google-translate"` or `"gtts"` - Google Translate TTS endpoint
///
/// # Example
///
/// ```rust,ignore
/// use bhasha_tts::core::tts::{create_tts_provider, GoogleTranslateTTSConfig};
///
/// let provider = create_tts_provider("google", GoogleTranslateTTSConfig::default())?;
/// ```
pub fn create_tts_provider(
    provider_type: &str,
    config: GoogleTranslateTTSConfig,
) -> TTSResult<Box<dyn SpeechSynthesizer>> {
    match provider_type.to_lowercase().as_str() {
        "google" | "google-translate" | "gtts" => Ok(Box::new(GoogleTranslateTTS::new(config)?)),
        _ => Err(TTSError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: google"
        ))),
    }
}
