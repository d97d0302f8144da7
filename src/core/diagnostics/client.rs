use reqwest::Client;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// DesiVocal generation info endpoint
pub const GENERATION_INFO_URL: &str =
    "https://prod-api2.desivocal.com/dv/api/v0/tts_api/generation_info";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X_API_KEY";

/// Errors that prevent a diagnostics response from being obtained.
///
/// A non-200 HTTP response is not an error here; it is returned as a
/// [`GenerationInfo`] with its status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticsError {
    #[error("API key not found. Please set X_API_KEY in .env file.")]
    Unconfigured,

    #[error("Request failed: {0}")]
    Transport(String),
}

pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// API credential, wiped from memory when dropped
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Empty or blank values count as absent.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Raw response from the generation info endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInfo {
    pub status: u16,
    pub body: String,
}

impl GenerationInfo {
    /// Only an exact 200 counts as success; every other status is shown as a failure
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client for the generation info endpoint
#[derive(Clone)]
pub struct GenerationInfoClient {
    client: Client,
    url: String,
    api_key: Option<ApiKey>,
}

impl std::fmt::Debug for GenerationInfoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationInfoClient")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GenerationInfoClient {
    pub fn new(client: Client, url: impl Into<String>, api_key: Option<ApiKey>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key,
        }
    }

    /// Whether a credential was loaded at startup
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Issue a single authenticated GET and return the status and body verbatim.
    ///
    /// Without a credential no request is made and
    /// [`DiagnosticsError::Unconfigured`] is returned.
    pub async fn fetch_generation_info(&self) -> DiagnosticsResult<GenerationInfo> {
        let api_key = self.api_key.as_ref().ok_or(DiagnosticsError::Unconfigured)?;

        let response = self
            .client
            .get(&self.url)
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Generation info request failed: {}", e);
                DiagnosticsError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DiagnosticsError::Transport(format!("Failed to read response: {e}")))?;

        if status == 200 {
            tracing::debug!("Generation info fetched ({} bytes)", body.len());
        } else {
            tracing::warn!("Generation info endpoint returned status {}", status);
        }

        Ok(GenerationInfo { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: String, key: Option<&str>) -> GenerationInfoClient {
        GenerationInfoClient::new(Client::new(), url, key.and_then(ApiKey::new))
    }

    #[test]
    fn test_api_key_blank_is_absent() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new("abc").unwrap().expose(), "abc");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));

        let client = client_for(GENERATION_INFO_URL.to_string(), Some("super-secret"));
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn test_generation_info_success_is_exactly_200() {
        let ok = GenerationInfo {
            status: 200,
            body: String::new(),
        };
        let created = GenerationInfo {
            status: 201,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!created.is_success());
    }

    #[tokio::test]
    async fn test_fetch_sends_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generation_info"))
            .and(header("X_API_KEY", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credits": 42}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(format!("{}/generation_info", server.uri()), Some("test-key"));
        let info = client.fetch_generation_info().await.unwrap();

        assert_eq!(info.status, 200);
        assert_eq!(info.body, r#"{"credits": 42}"#);
        assert!(info.is_success());
    }

    #[tokio::test]
    async fn test_fetch_returns_failure_status_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let client = client_for(server.uri(), Some("wrong"));
        let info = client.fetch_generation_info().await.unwrap();

        assert_eq!(info.status, 401);
        assert_eq!(info.body, "Invalid API key");
        assert!(!info.is_success());
    }

    #[tokio::test]
    async fn test_fetch_without_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(server.uri(), None);
        assert!(!client.is_configured());
        assert_eq!(
            client.fetch_generation_info().await,
            Err(DiagnosticsError::Unconfigured)
        );
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let client = client_for("http://127.0.0.1:9/generation_info".to_string(), Some("k"));
        let err = client.fetch_generation_info().await.unwrap_err();
        assert!(matches!(err, DiagnosticsError::Transport(_)));
        assert!(err.to_string().starts_with("Request failed:"));
    }
}
