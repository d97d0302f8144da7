//! Configuration module for the Bhasha TTS server
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use bhasha_tts::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
mod merge;
mod utils;
mod validation;
mod yaml;

use crate::core::diagnostics::ApiKey;
use crate::core::tts::{GoogleTranslateTTSConfig, SpeechSpeed};

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 8501;
pub(crate) const DEFAULT_TTS_PROVIDER: &str = "google";
pub(crate) const DEFAULT_RATE_LIMIT_RPS: u32 = 10;
pub(crate) const DEFAULT_RATE_LIMIT_BURST: u32 = 20;

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the server:
/// - Server settings (host, port, TLS)
/// - Generation info credential and endpoint
/// - Speech synthesis endpoint settings
/// - Rate limiting
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Diagnostics
    /// DesiVocal API key (`X_API_KEY`). Absence disables the generation info action.
    pub diagnostics_api_key: Option<String>,
    /// Generation info endpoint (`GENERATION_INFO_URL`)
    pub diagnostics_url: String,

    // Speech synthesis
    /// Provider name understood by `create_tts_provider` (`TTS_PROVIDER`)
    pub tts_provider: String,
    /// Scheme and host of the translate endpoint (`TTS_BASE_URL`)
    pub tts_base_url: String,
    /// Request slow speech (`TTS_SLOW`)
    pub tts_slow: bool,

    // Rate limiting configuration
    /// Maximum requests per second per IP address
    /// Default: 10
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 20
    pub rate_limit_burst_size: u32,
}

/// Zeroize the credential when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.diagnostics_api_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable fallbacks
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        // .env is loaded in main.rs before this runs
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate_config(&config)?;

        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// The generation info credential, if one was configured
    pub fn diagnostics_api_key(&self) -> Option<&str> {
        self.diagnostics_api_key.as_deref()
    }

    /// Credential wrapped for handing to the diagnostics client
    pub fn diagnostics_credential(&self) -> Option<ApiKey> {
        self.diagnostics_api_key().and_then(ApiKey::new)
    }

    /// Synthesis settings derived from this configuration
    pub fn tts_config(&self) -> GoogleTranslateTTSConfig {
        GoogleTranslateTTSConfig {
            base_url: self.tts_base_url.clone(),
            speed: SpeechSpeed::from_slow_flag(self.tts_slow),
            ..Default::default()
        }
    }
}
