use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in
/// the file take precedence over environment variables.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 8501
///   tls:
///     cert_path: "/etc/bhasha/cert.pem"
///     key_path: "/etc/bhasha/key.pem"
///
/// diagnostics:
///   api_key: "your-desivocal-key"
///   url: "https://prod-api2.desivocal.com/dv/api/v0/tts_api/generation_info"
///
/// tts:
///   provider: "google"
///   base_url: "https://translate.google.com"
///   slow: false
///
/// security:
///   rate_limit_requests_per_second: 10
///   rate_limit_burst_size: 20
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub diagnostics: Option<DiagnosticsYaml>,
    pub tts: Option<TtsYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsYaml>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Generation info endpoint settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DiagnosticsYaml {
    /// DesiVocal API key, sent as the `X_API_KEY` header
    pub api_key: Option<String>,
    pub url: Option<String>,
}

/// Speech synthesis settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TtsYaml {
    pub provider: Option<String>,
    pub base_url: Option<String>,
    pub slow: Option<bool>,
}

/// Security settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The YAML is malformed
    /// - Fields have invalid types
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080
  tls:
    enabled: true
    cert_path: "/tmp/cert.pem"
    key_path: "/tmp/key.pem"

diagnostics:
  api_key: "dv-key"
  url: "https://diag.example.com/info"

tts:
  provider: "google"
  base_url: "https://translate.google.co.in"
  slow: true

security:
  rate_limit_requests_per_second: 5
  rate_limit_burst_size: 7
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();

        let server = config.server.unwrap();
        assert_eq!(server.host, Some("127.0.0.1".to_string()));
        assert_eq!(server.port, Some(8080));
        let tls = server.tls.unwrap();
        assert_eq!(tls.enabled, Some(true));
        assert_eq!(tls.cert_path, Some("/tmp/cert.pem".to_string()));

        let diagnostics = config.diagnostics.unwrap();
        assert_eq!(diagnostics.api_key, Some("dv-key".to_string()));
        assert_eq!(
            diagnostics.url,
            Some("https://diag.example.com/info".to_string())
        );

        let tts = config.tts.unwrap();
        assert_eq!(tts.provider, Some("google".to_string()));
        assert_eq!(tts.slow, Some(true));

        let security = config.security.unwrap();
        assert_eq!(security.rate_limit_requests_per_second, Some(5));
        assert_eq!(security.rate_limit_burst_size, Some(7));
    }

    #[test]
    fn test_yaml_config_partial() {
        let yaml = r#"
diagnostics:
  api_key: "only-key"
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.server.is_none());
        assert!(config.tts.is_none());
        assert_eq!(
            config.diagnostics.unwrap().api_key,
            Some("only-key".to_string())
        );
    }

    #[test]
    fn test_yaml_config_empty() {
        let config: YamlConfig = serde_yaml::from_str("").unwrap_or_default();
        assert!(config.server.is_none());
        assert!(config.diagnostics.is_none());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "server:\n  port: 9000\n").unwrap();

        let config = YamlConfig::from_file(&path).unwrap();
        assert_eq!(config.server.unwrap().port, Some(9000));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "server: [unclosed").unwrap();

        let err = YamlConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML config"));
    }
}
