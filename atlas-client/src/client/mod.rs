//! Atlas API HTTP client.
//!
//! One [`AtlasClient`] per API key. The client is stateless between
//! calls: each endpoint method performs exactly one authenticated GET
//! and decodes the JSON body, so clones can be used concurrently
//! without coordination.

use std::fmt;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AtlasError;

mod cities;
mod competition;
mod demographics;

/// Default base URL for the Atlas API.
const DEFAULT_BASE_URL: &str = "https://api.atlasintel.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum response-body characters carried in validation errors.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Atlas client.
#[derive(Clone)]
pub struct AtlasConfig {
    /// API key sent in the Authorization header of every request
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AtlasConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// The API key must never reach logs, so Debug is written out by hand.
impl fmt::Debug for AtlasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlasConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Atlas API client.
///
/// Construct once with [`AtlasClient::new`]; the key and base URL are
/// fixed for the client's lifetime. Cloning is cheap (the underlying
/// HTTP client and its connection pool are shared).
#[derive(Debug, Clone)]
pub struct AtlasClient {
    http: reqwest::Client,
    base_url: String,
}

impl AtlasClient {
    /// Create a new Atlas client with the given configuration.
    pub fn new(config: AtlasConfig) -> Result<Self, AtlasError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| AtlasError::invalid("API key contains non-printable characters"))?;
        // Keeps the key out of reqwest's own Debug output
        api_key.set_sensitive(true);
        headers.insert(AUTHORIZATION, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Perform one GET against `path` and decode the JSON body as `T`.
    ///
    /// Maps the response status to the error taxonomy: 401/403 →
    /// `Unauthorized`, 404 → `NotFound`, 400/422 → `Validation`,
    /// 429 → `RateLimited`, any other non-2xx → `Service`. A 2xx body
    /// that fails to decode is a `Validation` error carrying a snippet
    /// of the body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AtlasError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        debug!(path, status = status.as_u16(), "atlas API response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AtlasError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasError::NotFound {
                message: snippet(&body),
            });
        }

        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasError::Validation {
                message: format!("request rejected by the API ({})", status.as_u16()),
                body: Some(snippet(&body)),
            });
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AtlasError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasError::Service {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AtlasError::Validation {
            message: e.to_string(),
            body: Some(snippet(&body)),
        })
    }
}

/// Truncate a response body for inclusion in an error.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}
