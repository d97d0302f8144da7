use crate::core::diagnostics::GenerationInfoClient;
use crate::core::language::Language;
use crate::core::tts::SpeechSynthesizer;

use super::view::{Outcome, VALIDATION_WARNING};

/// The Play action.
///
/// Blank text is rejected before the synthesizer is touched. Otherwise the
/// result is either a playable clip or an error message, never both.
pub async fn play(synthesizer: &dyn SpeechSynthesizer, language: Language, text: &str) -> Outcome {
    if text.trim().is_empty() {
        return Outcome::Warning(VALIDATION_WARNING.to_string());
    }

    match synthesizer.synthesize(text, language).await {
        Ok(clip) if clip.is_empty() => {
            tracing::warn!("Synthesizer returned an empty clip for {}", language.name());
            Outcome::Error("Error: TTS engine returned no audio".to_string())
        }
        Ok(clip) => {
            let filename = language.download_filename(clip.format.extension());
            Outcome::Audio { clip, filename }
        }
        Err(e) => {
            tracing::warn!("Synthesis failed for {}: {}", language.name(), e);
            Outcome::Error(format!("Error: {e}"))
        }
    }
}

/// The View Generation Info action.
///
/// Any status other than 200 is rendered through the same failure block.
pub async fn view_generation_info(client: &GenerationInfoClient) -> Outcome {
    match client.fetch_generation_info().await {
        Ok(info) if info.is_success() => Outcome::GenerationInfo { body: info.body },
        Ok(info) => Outcome::GenerationInfoFailed {
            status: info.status,
            body: info.body,
        },
        Err(e) => Outcome::Error(e.to_string()),
    }
}
