//! Google Translate TTS provider module.
//!
//! Synthesizes MP3 speech through the public translate endpoint, the same
//! service used by the translate web UI. Text longer than the endpoint's
//! per-request limit is chunked and the resulting clips are joined.
//!
//! # Supported Languages
//!
//! bn (Bengali), en (English), hi (Hindi)

mod config;
mod provider;
pub mod tokenizer;

pub use config::{
    GOOGLE_TRANSLATE_BASE_URL, GoogleTranslateTTSConfig, MAX_CHUNK_CHARS, SpeechSpeed,
    TRANSLATE_TTS_PATH,
};
pub use provider::GoogleTranslateTTS;
