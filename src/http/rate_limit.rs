//! Client-side request throttling

use crate::error::{Error, Result};
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;

/// Token bucket allowing `requests_per_second`, with a burst of the same size
pub struct RateLimiter {
    bucket: DefaultDirectRateLimiter,
    requests_per_second: NonZeroU32,
}

impl RateLimiter {
    /// Create a limiter; zero requests per second is rejected
    pub fn per_second(requests_per_second: u32) -> Result<Self> {
        let rate = NonZeroU32::new(requests_per_second).ok_or_else(|| {
            Error::invalid_value("requests_per_second", "must be a positive integer")
        })?;
        Ok(Self {
            bucket: DefaultDirectRateLimiter::direct(Quota::per_second(rate)),
            requests_per_second: rate,
        })
    }

    /// Wait for the next request slot
    pub async fn wait(&self) {
        self.bucket.until_ready().await;
    }

    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second.get()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("requests_per_second", &self.requests_per_second)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn test_zero_rate_rejected() {
        let err = RateLimiter::per_second(0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "requests_per_second"));
    }

    #[tokio::test]
    async fn test_burst_then_throttle() {
        let limiter = RateLimiter::per_second(2).unwrap();
        assert_eq!(limiter.requests_per_second(), 2);

        for _ in 0..2 {
            timeout(Duration::from_millis(100), limiter.wait())
                .await
                .expect("burst slot should be free");
        }

        // Next slot opens after ~500ms
        assert!(timeout(Duration::from_millis(50), limiter.wait())
            .await
            .is_err());
    }
}
