//! Client side throttle for outgoing API requests
//!
//! Tencent Cloud enforces per action quotas server side and answers
//! `RequestLimitExceeded` once they are exhausted. Spreading requests with a
//! token bucket (`governor`) keeps a busy client below those quotas.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a rate limiter from configuration
    ///
    /// `max_requests` tokens are replenished evenly over `period_seconds`,
    /// with at most `burst_size` available at once. Returns `None` when the
    /// configuration disables throttling.
    ///
    /// # Example
    ///
    /// ```
    /// use tencentcloud_vpc::application::config::RateLimiterConfig;
    /// use tencentcloud_vpc::application::rate_limiter::RateLimiter;
    ///
    /// let config = RateLimiterConfig {
    ///     max_requests: 20,
    ///     period_seconds: 1,
    ///     burst_size: 5,
    /// };
    /// assert!(RateLimiter::new(&config).is_some());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Option<Self> {
        if !config.is_enabled() {
            return None;
        }

        let period = Duration::from_secs(config.period_seconds) / config.max_requests;
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)?.allow_burst(burst_size);

        Some(Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        })
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Checks if a request can be made immediately, consuming a token if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
