//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use bhasha_tts::{
    Language, ServerConfig,
    core::tts::{AudioClip, AudioFormat, SpeechSynthesizer, TTSError, TTSResult},
    routes,
    state::AppState,
};

/// Minimal configuration pointing the diagnostics client at `diagnostics_url`
pub fn test_config(diagnostics_url: &str, api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        diagnostics_api_key: api_key.map(str::to_string),
        diagnostics_url: diagnostics_url.to_string(),
        tts_provider: "google".to_string(),
        tts_base_url: "http://127.0.0.1:9".to_string(),
        tts_slow: false,
        rate_limit_requests_per_second: 10,
        rate_limit_burst_size: 20,
    }
}

/// Synthesizer double that counts calls and remembers the last language
pub struct CountingSynth {
    calls: AtomicUsize,
    last_language: std::sync::Mutex<Option<Language>>,
    fail_with: Option<TTSError>,
}

impl CountingSynth {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_language: std::sync::Mutex::new(None),
            fail_with: None,
        })
    }

    pub fn failing(error: TTSError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_language: std::sync::Mutex::new(None),
            fail_with: Some(error),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_language(&self) -> Option<Language> {
        *self.last_language.lock().unwrap()
    }
}

#[async_trait]
impl SpeechSynthesizer for CountingSynth {
    async fn synthesize(&self, _text: &str, language: Language) -> TTSResult<AudioClip> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_language.lock().unwrap() = Some(language);

        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(AudioClip::new(b"ID3fake".to_vec(), AudioFormat::Mp3)),
        }
    }

    fn get_provider_info(&self) -> serde_json::Value {
        serde_json::json!({ "provider": "counting" })
    }
}

pub fn app(config: ServerConfig, synth: Arc<CountingSynth>) -> Router {
    routes::create_router(AppState::with_synthesizer(config, synth))
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
