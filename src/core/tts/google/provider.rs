//! Google Translate TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `GET https://translate.google.com/translate_tts`
//! - Parameters: `ie`, `q`, `tl`, `total`, `idx`, `textlen`, `client`, `ttsspeed`
//! - Output: MP3 (one clip per request, clips are concatenated in order)
//! - Limit: 100 characters of text per request

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::StatusCode;

use super::config::GoogleTranslateTTSConfig;
use super::tokenizer::split_text;
use crate::core::language::Language;
use crate::core::tts::base::{AudioClip, AudioFormat, SpeechSynthesizer, TTSError, TTSResult};

/// Browser-like user agent; the endpoint refuses unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Best-effort explanation for a failed request
fn probable_cause(status: StatusCode) -> &'static str {
    match status.as_u16() {
        403 => "Bad token or upstream API changes",
        404 => "Unsupported language or the endpoint has moved",
        429 => "Too many requests to the TTS API",
        500..=599 => "Upstream API error. Try again later.",
        _ => "Unknown",
    }
}

/// Speech synthesis backed by the Google Translate TTS endpoint
///
/// # Example
///
/// ```rust,no_run
/// use bhasha_tts::core::language::Language;
/// use bhasha_tts::core::tts::{GoogleTranslateTTS, GoogleTranslateTTSConfig, SpeechSynthesizer};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let tts = GoogleTranslateTTS::new(GoogleTranslateTTSConfig::default())?;
/// let clip = tts.synthesize("নমস্কার", Language::Bengali).await?;
/// println!("Received {} bytes", clip.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoogleTranslateTTS {
    client: reqwest::Client,
    config: GoogleTranslateTTSConfig,
    endpoint: String,
}

impl GoogleTranslateTTS {
    /// Create a provider with its own HTTP client
    pub fn new(config: GoogleTranslateTTSConfig) -> TTSResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self::with_client(client, config))
    }

    /// Create a provider that shares an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: GoogleTranslateTTSConfig) -> Self {
        let endpoint = config.endpoint();
        Self {
            client,
            config,
            endpoint,
        }
    }

    /// Build the request for one chunk of text
    pub(crate) fn build_http_request(
        &self,
        chunk: &str,
        language: Language,
        idx: usize,
        total: usize,
    ) -> reqwest::RequestBuilder {
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        self.client
            .get(&self.endpoint)
            .header(reqwest::header::REFERER, "https://translate.google.com/")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language.code()),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
                ("ttsspeed", self.config.speed.as_str()),
            ])
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: Language,
        idx: usize,
        total: usize,
    ) -> TTSResult<Bytes> {
        let response = self
            .build_http_request(chunk, language, idx, total)
            .send()
            .await
            .map_err(|e| TTSError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "TTS API returned {} for chunk {}/{} ({})",
                status,
                idx + 1,
                total,
                language.code()
            );
            return Err(TTSError::ProviderError(format!(
                "{} from TTS API. Probable cause: {}",
                status,
                probable_cause(status)
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TTSError::NetworkError(format!("Failed to read audio: {e}")))?;

        if body.is_empty() {
            return Err(TTSError::AudioGenerationFailed(format!(
                "TTS API returned no audio for chunk {}/{}",
                idx + 1,
                total
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTTS {
    async fn synthesize(&self, text: &str, language: Language) -> TTSResult<AudioClip> {
        let chunks = split_text(text, self.config.max_chunk_chars);
        if chunks.is_empty() {
            return Err(TTSError::EmptyText);
        }

        let total = chunks.len();
        tracing::debug!(
            "Synthesizing {} chunk(s) of {} text",
            total,
            language.name()
        );

        let mut audio = BytesMut::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let data = self.fetch_chunk(chunk, language, idx, total).await?;
            audio.extend_from_slice(&data);
        }

        tracing::info!(
            "Generated {} bytes of {} audio",
            audio.len(),
            language.name()
        );
        Ok(AudioClip::new(audio.freeze(), AudioFormat::Mp3))
    }

    fn get_provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": "google-translate",
            "api_type": "HTTP REST",
            "endpoint": self.endpoint,
            "supported_formats": ["mp3"],
            "supported_languages": Language::ALL.iter().map(|l| l.code()).collect::<Vec<_>>(),
            "max_chunk_chars": self.config.max_chunk_chars,
            "speed": self.config.speed.as_str(),
        })
    }
}
