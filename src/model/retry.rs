use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay policy between two attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetryDuration {
    /// Same delay before every retry
    Constant(Duration),
    /// `2^attempt` seconds before retry number `attempt`
    #[default]
    Exponential,
}

impl RetryDuration {
    /// Delay to wait before retry number `attempt` (zero based)
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            RetryDuration::Constant(d) => *d,
            RetryDuration::Exponential => Duration::from_secs(1u64 << attempt.min(32)),
        }
    }
}

/// Configuration for request retry behavior
///
/// Two independent budgets exist. Network failures are retried only for
/// idempotent requests (the ones carrying a `ClientToken`); throttled
/// requests (`RequestLimitExceeded`) are retried regardless of the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Extra attempts after a timeout or connection failure
    pub network_failure_max_retries: u32,
    /// Delay between network failure retries
    pub network_failure_retry_duration: RetryDuration,
    /// Extra attempts after a `RequestLimitExceeded` reply
    pub rate_limit_exceeded_max_retries: u32,
    /// Delay between rate limit retries
    pub rate_limit_exceeded_retry_duration: RetryDuration,
}

impl RetryConfig {
    /// Creates a retry configuration from the environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            network_failure_max_retries: 0,
            network_failure_retry_duration: RetryDuration::Exponential,
            rate_limit_exceeded_max_retries: 0,
            rate_limit_exceeded_retry_duration: RetryDuration::Exponential,
        }
    }

    /// Retries network failures up to `max_retries` times
    #[must_use]
    pub fn with_network_failure_retries(mut self, max_retries: u32, duration: RetryDuration) -> Self {
        self.network_failure_max_retries = max_retries;
        self.network_failure_retry_duration = duration;
        self
    }

    /// Retries throttled requests up to `max_retries` times
    #[must_use]
    pub fn with_rate_limit_retries(mut self, max_retries: u32, duration: RetryDuration) -> Self {
        self.rate_limit_exceeded_max_retries = max_retries;
        self.rate_limit_exceeded_retry_duration = duration;
        self
    }

    /// Whether any retry budget is set, in which case client tokens are injected
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.network_failure_max_retries > 0 || self.rate_limit_exceeded_max_retries > 0
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let network_failure_max_retries: Option<u32> =
            get_env_or_none("TENCENTCLOUD_NETWORK_FAILURE_MAX_RETRIES");
        let rate_limit_exceeded_max_retries: Option<u32> =
            get_env_or_none("TENCENTCLOUD_RATE_LIMIT_MAX_RETRIES");
        let delay_secs: Option<u64> = get_env_or_none("TENCENTCLOUD_RETRY_DELAY_SECS");
        let duration = delay_secs
            .map(|secs| RetryDuration::Constant(Duration::from_secs(secs)))
            .unwrap_or_default();

        Self {
            network_failure_max_retries: network_failure_max_retries.unwrap_or(0),
            network_failure_retry_duration: duration,
            rate_limit_exceeded_max_retries: rate_limit_exceeded_max_retries.unwrap_or(0),
            rate_limit_exceeded_retry_duration: duration,
        }
    }
}
