//! HTTP client for the Nikabot API
//!
//! Each GET waits for a rate-limiter slot and carries the bearer token
//! unless the request is anonymous. Failures that [`Error::is_retryable`]
//! accepts are retried with exponential backoff, or after the server's
//! `Retry-After` on HTTP 429.

use super::rate_limit::RateLimiter;
use crate::config::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Delay before the first retry; doubled on each further attempt
pub const INITIAL_BACKOFF: Duration = Duration::from_millis(100);

/// Upper bound on the backoff delay
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Wait applied to a 429 without a usable `Retry-After` header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// API root every request path is joined onto
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    pub requests_per_second: u32,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            requests_per_second: 10,
            user_agent: format!("tap-nikabot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn requests_per_second(mut self, rate: u32) -> Self {
        self.config.requests_per_second = rate;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
    /// Skip the bearer token
    pub anonymous: bool,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Send this request without authentication
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    bearer_token: Option<String>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Build a client; fails on an invalid base URL or rate
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            bearer_token: None,
            rate_limiter: RateLimiter::per_second(config.requests_per_second)?,
        })
    }

    /// Authenticate every non-anonymous request with a bearer token
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, config: &RequestConfig) -> Result<T> {
        let url = self.endpoint(path)?;
        let body = self.get_with_retry(&url, config).await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("Invalid JSON from {url}: {e}")))
    }

    async fn get_with_retry(&self, url: &Url, config: &RequestConfig) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.get_once(url, config).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    warn!(
                        "GET {} failed ({e}), retry {}/{} in {delay:?}",
                        url.path(),
                        attempt + 1,
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once(&self, url: &Url, config: &RequestConfig) -> Result<String> {
        self.rate_limiter.wait().await;

        let mut request = self.client.get(url.clone()).query(&config.query);
        if let (Some(token), false) = (&self.bearer_token, config.anonymous) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after_seconds: retry_after(&response),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), body));
        }
        debug!("GET {} -> {}", url.path(), status.as_u16());
        Ok(body)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("has_bearer_token", &self.bearer_token.is_some())
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

/// Exponential backoff for the given zero-based retry
pub fn backoff(attempt: u32) -> Duration {
    INITIAL_BACKOFF
        .saturating_mul(2u32.saturating_pow(attempt))
        .min(MAX_BACKOFF)
}

fn retry_delay(error: &Error, attempt: u32) -> Duration {
    match error {
        Error::RateLimited {
            retry_after_seconds,
        } => Duration::from_secs(*retry_after_seconds),
        _ => backoff(attempt),
    }
}

fn retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
