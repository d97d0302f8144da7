//! Configuration types for the Google Translate TTS endpoint.

/// Default endpoint host
pub const GOOGLE_TRANSLATE_BASE_URL: &str = "https://translate.google.com";

/// Path of the speech endpoint, relative to the base URL
pub const TRANSLATE_TTS_PATH: &str = "/translate_tts";

/// Maximum number of characters accepted by the endpoint per request
pub const MAX_CHUNK_CHARS: usize = 100;

/// Speaking speed understood by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechSpeed {
    #[default]
    Normal,
    Slow,
}

impl SpeechSpeed {
    /// Convert to the `ttsspeed` query value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "1",
            Self::Slow => "0.3",
        }
    }

    pub fn from_slow_flag(slow: bool) -> Self {
        if slow { Self::Slow } else { Self::Normal }
    }
}

/// Settings for [`super::GoogleTranslateTTS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleTranslateTTSConfig {
    /// Scheme and host of the endpoint, without trailing slash
    pub base_url: String,
    pub speed: SpeechSpeed,
    /// Per-request character limit used when chunking text
    pub max_chunk_chars: usize,
}

impl Default for GoogleTranslateTTSConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_TRANSLATE_BASE_URL.to_string(),
            speed: SpeechSpeed::Normal,
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }
}

impl GoogleTranslateTTSConfig {
    /// Full URL of the speech endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TRANSLATE_TTS_PATH)
    }
}
