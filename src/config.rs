//! Tap configuration
//!
//! The config file is a JSON object. Only `access_token` is required;
//! everything else falls back to the defaults below.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

/// Base URL of the Nikabot API
pub const DEFAULT_BASE_URL: &str = "https://api.nikabot.com";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Config keys that must be present
pub const REQUIRED_CONFIG_KEYS: &[&str] = &["access_token"];

/// Runtime configuration for the tap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapConfig {
    /// Bearer token for the Nikabot API
    #[serde(default)]
    pub access_token: String,

    /// Number of records requested per page
    #[serde(default = "default_page_size", deserialize_with = "deserialize_page_size")]
    pub page_size: u32,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries per request on retryable failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Client-side rate limit
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_user_agent() -> String {
    format!("tap-nikabot/{}", env!("CARGO_PKG_VERSION"))
}

/// Accepts `"page_size": 500` as well as `"page_size": "500"`.
fn deserialize_page_size<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("page_size '{s}' is not a number"))),
    }
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            page_size: default_page_size(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            requests_per_second: default_requests_per_second(),
            user_agent: default_user_agent(),
        }
    }
}

impl TapConfig {
    /// Create a config with the given token and all defaults
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;

        for key in REQUIRED_CONFIG_KEYS {
            if value.get(key).is_none() {
                return Err(Error::missing_field(*key));
            }
        }

        let config: Self = serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {e}")))?;
        Self::from_json(&contents)
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(Error::missing_field("access_token"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be a positive integer"));
        }
        if self.requests_per_second == 0 {
            return Err(Error::invalid_value(
                "requests_per_second",
                "must be a positive integer",
            ));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        Ok(())
    }

    /// Build the HTTP client configuration for this tap
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .requests_per_second(self.requests_per_second)
            .user_agent(self.user_agent.clone())
            .build()
    }
}
