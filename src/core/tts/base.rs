use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::core::language::Language;

/// Error types for synthesis operations
///
/// Every variant is rendered through the same error path, carrying a
/// human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TTSError {
    #[error("No text to speak")]
    EmptyText,

    #[error("Audio generation failed: {0}")]
    AudioGenerationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Result type for synthesis operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Encoded audio formats produced by synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    /// MIME type used for playback and download
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
        }
    }

    /// File extension without the leading dot
    #[inline]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

/// A complete, in-memory encoded audio buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Bytes,
    pub format: AudioFormat,
}

impl AudioClip {
    pub fn new(data: impl Into<Bytes>, format: AudioFormat) -> Self {
        Self {
            data: data.into(),
            format,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Text-to-speech engine boundary.
///
/// Implementations turn text into a complete encoded clip. Callers reject
/// empty or whitespace-only text before calling `synthesize`.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` spoken in `language`
    async fn synthesize(&self, text: &str, language: Language) -> TTSResult<AudioClip>;

    /// Provider-specific information
    fn get_provider_info(&self) -> serde_json::Value;
}
