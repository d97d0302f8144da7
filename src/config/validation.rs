use url::Url;

use super::ServerConfig;

/// Validate that a configured endpoint is an absolute http(s) URL with a host
pub fn validate_endpoint_url(name: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL ({value}): {e}"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{name} must use http or https, got: {}", url.scheme()).into());
    }

    if url.host_str().is_none() {
        return Err(format!("{name} must include a host: {value}").into());
    }

    Ok(())
}

/// Validate rate limiting settings
///
/// Both values must be non-zero; the limiter cannot be built otherwise.
pub fn validate_rate_limit(
    requests_per_second: u32,
    burst_size: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if requests_per_second == 0 {
        return Err("RATE_LIMIT_RPS must be greater than 0".into());
    }
    if burst_size == 0 {
        return Err("RATE_LIMIT_BURST must be greater than 0".into());
    }
    Ok(())
}

/// Run every check against a fully merged configuration
pub fn validate_config(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    validate_endpoint_url("GENERATION_INFO_URL", &config.diagnostics_url)?;
    validate_endpoint_url("TTS_BASE_URL", &config.tts_base_url)?;
    validate_rate_limit(
        config.rate_limit_requests_per_second,
        config.rate_limit_burst_size,
    )?;

    if let Some(tls) = &config.tls {
        if !tls.cert_path.exists() {
            return Err(format!(
                "TLS certificate file does not exist: {}",
                tls.cert_path.display()
            )
            .into());
        }
        if !tls.key_path.exists() {
            return Err(format!("TLS key file does not exist: {}", tls.key_path.display()).into());
        }
    }

    Ok(())
}
