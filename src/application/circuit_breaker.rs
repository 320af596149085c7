//! Region circuit breaker
//!
//! Counts how many signed requests to the regional endpoint get an effective
//! answer. When too many fail the breaker opens and requests are redirected to
//! a backup endpoint until a probation period proves the region healthy again.

use crate::constants::{CLIENT_ERROR_CIRCUIT_BREAKER, DEFAULT_BACKUP_ENDPOINT};
use crate::error::SdkError;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Failures needed in a window before the ratio is considered
pub const DEFAULT_MAX_FAIL_NUM: u32 = 5;
/// Failure percentage that opens the breaker
pub const DEFAULT_MAX_FAIL_PERCENTAGE: u32 = 75;
/// Length of a closed state counting window
pub const DEFAULT_WINDOW_INTERVAL: Duration = Duration::from_secs(60);
/// Time spent open before trying the region again
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(60);
/// Successes needed while half open to close the breaker
pub const DEFAULT_MAX_REQUESTS: u32 = 5;
/// Consecutive failures that open the breaker regardless of the ratio
const MAX_CONSECUTIVE_FAILURES: u32 = 5;

/// State of the breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// Requests go to the regional endpoint and are counted
    Closed,
    /// Requests go to the regional endpoint on probation
    HalfOpen,
    /// Requests go to the backup endpoint
    Open,
}

/// Tunables of the breaker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakerSettings {
    /// Domain used while open, without the service prefix
    pub backup_endpoint: String,
    /// Failures needed in a window before the ratio is considered
    pub max_fail_num: u32,
    /// Failure percentage that opens the breaker
    pub max_fail_percentage: u32,
    /// Closed state counters reset after this interval
    pub window_interval: Duration,
    /// Open state turns half open after this interval
    pub timeout: Duration,
    /// Half open state closes after this many successes
    pub max_requests: u32,
}

impl Default for BreakerSettings {
    fn default() -> Self {
        Self {
            backup_endpoint: DEFAULT_BACKUP_ENDPOINT.to_string(),
            max_fail_num: DEFAULT_MAX_FAIL_NUM,
            max_fail_percentage: DEFAULT_MAX_FAIL_PERCENTAGE,
            window_interval: DEFAULT_WINDOW_INTERVAL,
            timeout: DEFAULT_OPEN_TIMEOUT,
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    failures: u32,
    all: u32,
    consecutive_successes: u32,
    consecutive_failures: u32,
}

impl Counter {
    fn on_success(&mut self) {
        self.all += 1;
        self.consecutive_successes += 1;
        self.consecutive_failures = 0;
    }

    fn on_failure(&mut self) {
        self.all += 1;
        self.failures += 1;
        self.consecutive_successes = 0;
        self.consecutive_failures += 1;
    }

    fn clear(&mut self) {
        *self = Counter::default();
    }
}

#[derive(Debug)]
struct Inner {
    state: BreakerState,
    // `None` while half open, otherwise the end of the current generation
    expiry: Option<Instant>,
    generation: u64,
    counter: Counter,
}

/// Circuit breaker guarding the regional endpoint
#[derive(Debug)]
pub struct RegionBreaker {
    settings: BreakerSettings,
    inner: Mutex<Inner>,
}

impl RegionBreaker {
    /// Creates a closed breaker
    #[must_use]
    pub fn new(settings: BreakerSettings) -> Self {
        Self {
            settings,
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                expiry: None,
                generation: 0,
                counter: Counter::default(),
            }),
        }
    }

    /// Creates a breaker with default settings and the given backup endpoint
    #[must_use]
    pub fn with_backup_endpoint(backup_endpoint: impl Into<String>) -> Self {
        Self::new(BreakerSettings {
            backup_endpoint: backup_endpoint.into(),
            ..BreakerSettings::default()
        })
    }

    /// Settings in use
    #[must_use]
    pub fn settings(&self) -> &BreakerSettings {
        &self.settings
    }

    /// Domain used while open, without the service prefix
    #[must_use]
    pub fn backup_endpoint(&self) -> &str {
        &self.settings.backup_endpoint
    }

    /// Current state, rolling the generation over when it expired
    pub fn state(&self) -> Result<BreakerState, SdkError> {
        self.state_at(Instant::now())
    }

    /// [`Self::state`] evaluated at `now`
    pub fn state_at(&self, now: Instant) -> Result<BreakerState, SdkError> {
        let mut inner = self.lock()?;
        Ok(self.current_state(&mut inner, now).0)
    }

    /// Registers a request about to be sent
    ///
    /// Returns the generation the result must be reported against and whether
    /// the breaker is open.
    pub fn before_request(&self) -> Result<(u64, bool), SdkError> {
        self.before_request_at(Instant::now())
    }

    /// [`Self::before_request`] evaluated at `now`
    pub fn before_request_at(&self, now: Instant) -> Result<(u64, bool), SdkError> {
        let mut inner = self.lock()?;
        let (state, generation) = self.current_state(&mut inner, now);
        Ok((generation, state == BreakerState::Open))
    }

    /// Reports the outcome of a request registered with [`Self::before_request`]
    pub fn after_request(&self, generation: u64, success: bool) -> Result<(), SdkError> {
        self.after_request_at(generation, success, Instant::now())
    }

    /// [`Self::after_request`] evaluated at `now`
    pub fn after_request_at(
        &self,
        before: u64,
        success: bool,
        now: Instant,
    ) -> Result<(), SdkError> {
        let mut inner = self.lock()?;
        let (state, generation) = self.current_state(&mut inner, now);
        if generation != before {
            return Ok(());
        }

        if success {
            match state {
                BreakerState::Closed => inner.counter.on_success(),
                BreakerState::HalfOpen => {
                    inner.counter.on_success();
                    let successes = inner.counter.all - inner.counter.failures;
                    if successes >= self.settings.max_requests {
                        self.set_state(&mut inner, BreakerState::Closed, now);
                    }
                }
                BreakerState::Open => {}
            }
        } else {
            match state {
                BreakerState::Closed => {
                    inner.counter.on_failure();
                    if self.ready_to_open(&inner.counter) {
                        self.set_state(&mut inner, BreakerState::Open, now);
                    }
                }
                BreakerState::HalfOpen => self.set_state(&mut inner, BreakerState::Open, now),
                BreakerState::Open => {}
            }
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, SdkError> {
        self.inner
            .lock()
            .map_err(|e| SdkError::client(CLIENT_ERROR_CIRCUIT_BREAKER, e.to_string()))
    }

    fn current_state(&self, inner: &mut Inner, now: Instant) -> (BreakerState, u64) {
        let expired = inner.expiry.is_none_or(|expiry| expiry < now);
        match inner.state {
            BreakerState::Closed if expired => self.to_new_generation(inner, now),
            BreakerState::Open if expired => self.set_state(inner, BreakerState::HalfOpen, now),
            _ => {}
        }
        (inner.state, inner.generation)
    }

    fn set_state(&self, inner: &mut Inner, state: BreakerState, now: Instant) {
        if inner.state == state {
            return;
        }
        match state {
            BreakerState::Open => warn!(
                "region breaker open, redirecting to {}",
                self.settings.backup_endpoint
            ),
            BreakerState::Closed => info!("region breaker closed"),
            BreakerState::HalfOpen => info!("region breaker half open"),
        }
        inner.state = state;
        self.to_new_generation(inner, now);
    }

    fn to_new_generation(&self, inner: &mut Inner, now: Instant) {
        inner.generation += 1;
        inner.counter.clear();
        inner.expiry = match inner.state {
            BreakerState::Closed => Some(now + self.settings.window_interval),
            BreakerState::Open => Some(now + self.settings.timeout),
            BreakerState::HalfOpen => None,
        };
    }

    fn ready_to_open(&self, counter: &Counter) -> bool {
        let fail_ratio = f64::from(counter.failures) / f64::from(counter.all.max(1));
        let threshold = f64::from(self.settings.max_fail_percentage) / 100.0;
        (counter.failures >= self.settings.max_fail_num && fail_ratio >= threshold)
            || counter.consecutive_failures > MAX_CONSECUTIVE_FAILURES
    }
}

impl Default for RegionBreaker {
    fn default() -> Self {
        Self::new(BreakerSettings::default())
    }
}

/// Whether `endpoint` looks like a Tencent Cloud API endpoint
///
/// Accepts `cvm.tencentcloudapi.com` and `cvm.ap-shanghai.tencentcloudapi.com`,
/// rejects `cvm.tencentcloud.com` or a region label without a dash.
#[must_use]
pub fn check_endpoint(endpoint: &str) -> bool {
    let labels: Vec<&str> = endpoint.split('.').collect();
    if labels.len() != 3 && labels.len() != 4 {
        return false;
    }
    if labels[labels.len() - 2] != "tencentcloudapi" {
        return false;
    }
    !(labels.len() == 4 && labels[1].split('-').count() < 2)
}

/// Rewrites the region label of `old_domain`, inserting it when absent
#[must_use]
pub fn renew_url(old_domain: &str, region: &str) -> String {
    let mut labels: Vec<&str> = old_domain.split('.').collect();
    match labels.len() {
        3 => labels.insert(1, region),
        4 => labels[1] = region,
        _ => {}
    }
    labels.join(".")
}
