//! HTTP client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;
use url::Url;

use crate::error::{NetworkError, Result};
use crate::fetch::Fetcher;
use crate::targets;

/// Configuration for the HTTP client.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Option<Duration>,
    /// Connect timeout.
    pub connect_timeout: Option<Duration>,
    /// Whether to follow redirects.
    pub follow_redirects: bool,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// Default user agent.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            follow_redirects: true,
            max_redirects: 10,
            user_agent: Some(format!("gridglyph/{} (Rust)", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Disable request timeout.
    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Disable redirect following.
    pub fn no_redirects(mut self) -> Self {
        self.config.follow_redirects = false;
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build the HTTP client.
    pub fn build(self) -> Result<HttpClient> {
        let mut builder = reqwest::blocking::Client::builder().timeout(self.config.timeout);

        if let Some(connect_timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if self.config.follow_redirects {
            builder = builder.redirect(Policy::limited(self.config.max_redirects));
        } else {
            builder = builder.redirect(Policy::none());
        }

        if let Some(ref ua) = self.config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder.build()?;

        Ok(HttpClient {
            inner: Arc::new(HttpClientInner {
                client,
                config: self.config,
            }),
        })
    }
}

/// Internal state for the HTTP client.
struct HttpClientInner {
    client: reqwest::blocking::Client,
    config: HttpClientConfig,
}

/// A blocking client that fetches whole response bodies.
///
/// The client is cheaply cloneable and thread-safe. Clones share the same
/// connection pool and configuration.
///
/// Besides `http` and `https`, the client reads `file://` URLs straight from
/// disk, which lets a collection point at a local icon directory.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        HttpClientBuilder::new().build()
    }

    /// Create a builder for configuring a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Get the client's configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Fetch the full body at `url`.
    ///
    /// Non-success HTTP statuses are reported as [`NetworkError::HttpStatus`].
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url)?;

        match parsed.scheme() {
            "http" | "https" => self.get_remote(parsed),
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|()| NetworkError::InvalidUrl(url.to_string()))?;
                tracing::debug!(target: targets::HTTP, path = %path.display(), "reading local file");
                Ok(std::fs::read(&path)?)
            }
            other => Err(NetworkError::UnsupportedScheme(other.to_string())),
        }
    }

    fn get_remote(&self, url: Url) -> Result<Vec<u8>> {
        tracing::info!(target: targets::HTTP, %url, "fetching");

        let response = self.inner.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(target: targets::HTTP, %url, status = status.as_u16(), "fetch failed");
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().map(str::to_string),
            });
        }

        let body = response.bytes()?;
        tracing::debug!(target: targets::HTTP, %url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

impl Fetcher for HttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.get_bytes(url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.follow_redirects);
        assert!(config.user_agent.unwrap().starts_with("gridglyph/"));
    }

    #[test]
    fn builder_overrides() {
        let builder = HttpClientBuilder::new()
            .no_timeout()
            .no_redirects()
            .user_agent("tests");
        assert_eq!(builder.config.timeout, None);
        assert!(!builder.config.follow_redirects);
        assert_eq!(builder.config.user_agent.as_deref(), Some("tests"));
    }
}
