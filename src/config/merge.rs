use std::env;
use std::path::PathBuf;

use super::utils::{env_non_empty, parse_bool};
use super::yaml::YamlConfig;
use super::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST, DEFAULT_RATE_LIMIT_RPS,
    DEFAULT_TTS_PROVIDER, ServerConfig, TlsConfig,
};
use crate::core::diagnostics::GENERATION_INFO_URL;
use crate::core::tts::google::GOOGLE_TRANSLATE_BASE_URL;

fn parse_env<T>(name: &str) -> Result<Option<T>, Box<dyn std::error::Error>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env_non_empty(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Invalid value for {name} ({raw}): {e}").into()),
        None => Ok(None),
    }
}

fn parse_env_bool(name: &str) -> Result<Option<bool>, Box<dyn std::error::Error>> {
    match env_non_empty(name) {
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or_else(|| format!("Invalid boolean for {name}: {raw}").into()),
        None => Ok(None),
    }
}

/// Build a [`ServerConfig`] from environment variables with optional YAML overrides.
///
/// Environment variables (including values loaded from `.env`) form the
/// base; any value present in the YAML file replaces them; defaults fill
/// whatever is left.
pub(super) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let yaml = yaml.unwrap_or_default();
    let server = yaml.server.unwrap_or_default();
    let diagnostics = yaml.diagnostics.unwrap_or_default();
    let tts = yaml.tts.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    // Server settings
    let host = server
        .host
        .or_else(|| env_non_empty("HOST"))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match server.port {
        Some(port) => port,
        None => parse_env::<u16>("PORT")?.unwrap_or(DEFAULT_PORT),
    };

    // TLS: explicit `enabled: false` in YAML switches it off entirely
    let tls_yaml = server.tls.unwrap_or_default();
    let tls = if tls_yaml.enabled == Some(false) {
        None
    } else {
        let cert_path = tls_yaml
            .cert_path
            .or_else(|| env_non_empty("TLS_CERT_PATH"))
            .map(PathBuf::from);
        let key_path = tls_yaml
            .key_path
            .or_else(|| env_non_empty("TLS_KEY_PATH"))
            .map(PathBuf::from);
        match (cert_path, key_path) {
            (Some(cert_path), Some(key_path)) => Some(TlsConfig {
                cert_path,
                key_path,
            }),
            (None, None) => None,
            _ => return Err("TLS requires both TLS_CERT_PATH and TLS_KEY_PATH".into()),
        }
    };

    // Diagnostics endpoint
    let diagnostics_api_key = diagnostics
        .api_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| env_non_empty("X_API_KEY"));
    let diagnostics_url = diagnostics
        .url
        .or_else(|| env_non_empty("GENERATION_INFO_URL"))
        .unwrap_or_else(|| GENERATION_INFO_URL.to_string());

    // Speech synthesis
    let tts_provider = tts
        .provider
        .or_else(|| env_non_empty("TTS_PROVIDER"))
        .unwrap_or_else(|| DEFAULT_TTS_PROVIDER.to_string());
    let tts_base_url = tts
        .base_url
        .or_else(|| env_non_empty("TTS_BASE_URL"))
        .unwrap_or_else(|| GOOGLE_TRANSLATE_BASE_URL.to_string());
    let tts_slow = match tts.slow {
        Some(slow) => slow,
        None => parse_env_bool("TTS_SLOW")?.unwrap_or(false),
    };

    // Rate limiting
    let rate_limit_requests_per_second = match security.rate_limit_requests_per_second {
        Some(rps) => rps,
        None => parse_env::<u32>("RATE_LIMIT_RPS")?.unwrap_or(DEFAULT_RATE_LIMIT_RPS),
    };
    let rate_limit_burst_size = match security.rate_limit_burst_size {
        Some(burst) => burst,
        None => parse_env::<u32>("RATE_LIMIT_BURST")?.unwrap_or(DEFAULT_RATE_LIMIT_BURST),
    };

    if env::var("X_API_KEY").is_ok() && diagnostics_api_key.is_none() {
        tracing::warn!("X_API_KEY is set but empty; generation info will be unavailable");
    }

    Ok(ServerConfig {
        host,
        port,
        tls,
        diagnostics_api_key,
        diagnostics_url,
        tts_provider,
        tts_base_url,
        tts_slow,
        rate_limit_requests_per_second,
        rate_limit_burst_size,
    })
}
