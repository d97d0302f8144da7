//! Provider diagnostics.
//!
//! Fetches usage metadata ("generation info") from the DesiVocal TTS API.
//! The response is surfaced verbatim; nothing is parsed.

mod client;

pub use client::{
    API_KEY_HEADER, ApiKey, DiagnosticsError, DiagnosticsResult, GENERATION_INFO_URL,
    GenerationInfo, GenerationInfoClient,
};
