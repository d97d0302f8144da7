use super::ServerConfig;
use super::merge::merge_config;
use super::validation::validate_config;

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// The generation info credential is read from `X_API_KEY`; an unset or
    /// empty value leaves it absent rather than failing.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Numeric or boolean environment variables are malformed
    /// - Only one of the TLS paths is set
    /// - A configured URL is not an http(s) URL
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = merge_config(None)?;
        validate_config(&config)?;

        Ok(config)
    }
}
