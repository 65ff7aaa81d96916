//! HTTP implementation of the nutrition provider.

use super::{LookupError, NutritionProvider};
use crate::model::NutritionTable;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL of the production fruit service.
pub const DEFAULT_BASE_URL: &str = "https://my.smoothiefroot.com";

/// Per-request timeout for nutrition lookups.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Nutrition provider backed by the smoothiefroot HTTP API.
///
/// Issues `GET {base_url}/api/fruit/{search_key}` with a fixed timeout and
/// decodes the JSON body straight into a [`NutritionTable`]. One attempt per
/// lookup; a failed fruit is reported, not retried.
///
/// # Example
///
/// ```ignore
/// let provider = HttpNutritionProvider::new()
///     .with_base_url("http://localhost:9090")
///     .with_timeout(Duration::from_secs(2));
/// let table = provider.fetch("apple").await?;
/// ```
pub struct HttpNutritionProvider {
    /// HTTP client.
    client: Client,
    /// Service base URL.
    base_url: String,
    /// Request timeout.
    request_timeout: Duration,
}

impl HttpNutritionProvider {
    /// Creates a provider against the production service.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the provider at a different service, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn lookup_url(&self, search_key: &str) -> String {
        format!(
            "{}/api/fruit/{}",
            self.base_url.trim_end_matches('/'),
            search_key
        )
    }
}

impl Default for HttpNutritionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpNutritionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpNutritionProvider")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[async_trait]
impl NutritionProvider for HttpNutritionProvider {
    async fn fetch(&self, search_key: &str) -> Result<NutritionTable, LookupError> {
        let url = self.lookup_url(search_key);
        debug!(%url, "Fetching nutrition");

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Request(format!("timed out: {}", e))
                } else if e.is_connect() {
                    LookupError::Request(format!("connection failed: {}", e))
                } else {
                    LookupError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<NutritionTable>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_configuration() {
        let provider = HttpNutritionProvider::new();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.request_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_pattern() {
        let provider = HttpNutritionProvider::new()
            .with_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(provider.base_url, "http://localhost:9090");
        assert_eq!(provider.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_lookup_url_handles_trailing_slash() {
        let provider = HttpNutritionProvider::new().with_base_url("http://localhost:9090/");
        assert_eq!(
            provider.lookup_url("apple"),
            "http://localhost:9090/api/fruit/apple"
        );
    }

    #[test]
    fn test_debug_shows_endpoint() {
        let provider = HttpNutritionProvider::new();
        let debug_output = format!("{:?}", provider);
        assert!(debug_output.contains("my.smoothiefroot.com"));
    }

    #[tokio::test]
    async fn test_fetch_single_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fruit/apple"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"name": "apple", "calories": 52})),
            )
            .mount(&server)
            .await;

        let provider = HttpNutritionProvider::new().with_base_url(server.uri());
        let table = provider.fetch("apple").await.unwrap();

        assert_eq!(table.row_count(), 1);
        assert!(table.columns().contains(&"calories"));
    }

    #[tokio::test]
    async fn test_fetch_row_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fruit/apple"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "apple", "calories": 52},
                {"name": "crab apple", "calories": 76}
            ])))
            .mount(&server)
            .await;

        let provider = HttpNutritionProvider::new().with_base_url(server.uri());
        let table = provider.fetch("apple").await.unwrap();

        assert_eq!(table.row_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_server_error_maps_to_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fruit/apple"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = HttpNutritionProvider::new().with_base_url(server.uri());
        let err = provider.fetch("apple").await.unwrap_err();

        assert_eq!(err, LookupError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_scalar_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fruit/apple"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
            .mount(&server)
            .await;

        let provider = HttpNutritionProvider::new().with_base_url(server.uri());
        let err = provider.fetch("apple").await.unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connect_failure_maps_to_request() {
        // Nothing listens on this port; reqwest fails before any response.
        let provider = HttpNutritionProvider::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let err = provider.fetch("apple").await.unwrap_err();

        assert!(matches!(err, LookupError::Request(_)));
    }
}
