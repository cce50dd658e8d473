//! Error types for tap-nikabot
//!
//! Every fallible call in the crate returns [`Result`]. Failures that abort a
//! run are wrapped so the message names the operation and the API path
//! involved: [`Error::Sync`] for stream reads and [`Error::DiscoveryFetch`]
//! for the schema document.

use thiserror::Error;

/// The main error type for tap-nikabot
#[derive(Error, Debug)]
pub enum Error {
    // Configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // Talking to the API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // Discovery
    #[error("Discovery failed fetching {path}: {source}")]
    DiscoveryFetch {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Discovery failed for stream '{stream}': definition '{definition}' not found in API schema")]
    Discovery { stream: String, definition: String },

    #[error("Schema error: {message}")]
    Schema { message: String },

    // Sync
    #[error("Sync failed for stream '{stream}' ({path}): {source}")]
    Sync {
        stream: String,
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Stream '{stream}' not found in catalog")]
    StreamNotFound { stream: String },

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("State error: {message}")]
    State { message: String },

    // Local I/O and serialisation
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// A stream's definition is missing from the API schema
    pub fn discovery(stream: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::Discovery {
            stream: stream.into(),
            definition: definition.into(),
        }
    }

    /// The schema document at `path` could not be fetched
    pub fn discovery_fetch(path: impl Into<String>, source: Error) -> Self {
        Self::DiscoveryFetch {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Wrap an error raised while reading `path` for `stream`
    pub fn sync(stream: impl Into<String>, path: impl Into<String>, source: Error) -> Self {
        Self::Sync {
            stream: stream.into(),
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Whether retrying the same request may succeed
    ///
    /// This is the only place that decides which failures the HTTP client
    /// retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Error::Sync { source, .. }
            | Error::DiscoveryFetch { source, .. }
            | Error::Context { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

/// Result type alias for tap-nikabot
pub type Result<T> = std::result::Result<T, Error>;

/// Attach a message to an error while keeping it as the source
pub trait ResultExt<T> {
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: message.into(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("test message").to_string(),
            "Configuration error: test message"
        );
        assert_eq!(
            Error::missing_field("access_token").to_string(),
            "Missing required config field: access_token"
        );
        assert_eq!(Error::http_status(404, "Not found").to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_discovery_error_names_stream_and_definition() {
        let msg = Error::discovery("teams", "TeamDTO").to_string();
        assert!(msg.contains("teams"));
        assert!(msg.contains("TeamDTO"));
    }

    #[test]
    fn test_discovery_fetch_error_names_path() {
        let err = Error::discovery_fetch("/v2/api-docs", Error::http_status(503, "down"));
        assert_eq!(
            err.to_string(),
            "Discovery failed fetching /v2/api-docs: HTTP 503: down"
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_sync_error_names_stream_and_path() {
        let err = Error::sync("users", "/api/v1/users", Error::http_status(500, "boom"));
        assert_eq!(
            err.to_string(),
            "Sync failed for stream 'users' (/api/v1/users): HTTP 500: boom"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        for status in [429, 500, 502, 503, 504] {
            assert!(Error::http_status(status, "").is_retryable(), "{status}");
        }
        assert!(Error::sync("users", "/x", Error::http_status(502, "")).is_retryable());

        for status in [400, 401, 404, 501, 520] {
            assert!(!Error::http_status(status, "").is_retryable(), "{status}");
        }
        assert!(!Error::config("test").is_retryable());
        assert!(!Error::discovery("teams", "TeamDTO").is_retryable());
        assert!(!Error::decode("bad body").is_retryable());
    }

    #[test]
    fn test_result_context_keeps_source() {
        let result: Result<()> = Err(Error::config("inner"));
        let err = result.context("outer").unwrap_err();

        assert_eq!(err.to_string(), "outer: Configuration error: inner");
        assert!(matches!(
            std::error::Error::source(&err)
                .and_then(|s| s.downcast_ref::<Error>()),
            Some(Error::Config { .. })
        ));
    }
}
