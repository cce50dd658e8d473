//! HTTP module
//!
//! Provides the HTTP client and the transport the sync engine talks to.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Bearer Authentication**: Token injected on every API request
//! - **Transport**: Page and schema fetches behind the `Transport` trait

mod client;
mod rate_limit;
mod transport;

pub use client::{
    backoff, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, INITIAL_BACKOFF,
    MAX_BACKOFF,
};
pub use rate_limit::RateLimiter;
pub use transport::{NikabotTransport, Transport, SCHEMA_DOCUMENT_GROUP, SCHEMA_DOCUMENT_PATH};
