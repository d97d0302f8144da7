pub mod diagnostics;
pub mod language;
pub mod tts;

pub use diagnostics::{DiagnosticsError, GenerationInfo, GenerationInfoClient};
pub use language::Language;
pub use tts::{AudioClip, SpeechSynthesizer, TTSError};
