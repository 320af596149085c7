use crate::constants::{
    DEFAULT_REGION, DEFAULT_REQ_METHOD, DEFAULT_REQ_TIMEOUT_SECS, DEFAULT_ROOT_DOMAIN,
    DEFAULT_SCHEME,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

/// Signature algorithm applied to outgoing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignMethod {
    /// Legacy v1 signature with HMAC-SHA1
    #[serde(rename = "HmacSHA1")]
    HmacSha1,
    /// Legacy v1 signature with HMAC-SHA256
    #[serde(rename = "HmacSHA256")]
    HmacSha256,
    /// Signature v3
    #[default]
    #[serde(rename = "TC3-HMAC-SHA256")]
    Tc3HmacSha256,
}

impl SignMethod {
    /// Wire name of the algorithm
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SignMethod::HmacSha1 => "HmacSHA1",
            SignMethod::HmacSha256 => "HmacSHA256",
            SignMethod::Tc3HmacSha256 => "TC3-HMAC-SHA256",
        }
    }

    /// Whether this is one of the legacy v1 algorithms
    #[must_use]
    pub fn is_v1(&self) -> bool {
        matches!(self, SignMethod::HmacSha1 | SignMethod::HmacSha256)
    }
}

impl fmt::Display for SignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HmacSHA1" => Ok(SignMethod::HmacSha1),
            "HmacSHA256" => Ok(SignMethod::HmacSha256),
            "TC3-HMAC-SHA256" => Ok(SignMethod::Tc3HmacSha256),
            other => Err(format!("unknown signature method: {other}")),
        }
    }
}

/// Language of the error messages returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// Simplified Chinese
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// English
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// Wire value of the language
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" => Ok(Language::ZhCn),
            "en-US" => Ok(Language::EnUs),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Transport settings
pub struct HttpProfile {
    /// HTTP method, `POST` or `GET`
    pub req_method: String,
    /// Timeout in seconds for a single HTTP exchange
    pub req_timeout: u64,
    /// URL scheme
    pub scheme: String,
    /// Root domain used to derive `<service>.<root_domain>`
    pub root_domain: String,
    /// Fixed endpoint overriding the derived domain
    pub endpoint: Option<String>,
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self {
            req_method: DEFAULT_REQ_METHOD.to_string(),
            req_timeout: DEFAULT_REQ_TIMEOUT_SECS,
            scheme: DEFAULT_SCHEME.to_string(),
            root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
            endpoint: None,
        }
    }
}

impl HttpProfile {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.req_timeout)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
/// Configuration for client side throttling of API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period, zero disables throttling
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl RateLimiterConfig {
    /// Whether throttling is active
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0 && self.period_seconds > 0
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Behaviour of a [`crate::application::client::Client`]
pub struct ClientProfile {
    /// Transport settings
    pub http_profile: HttpProfile,
    /// Signature algorithm
    pub sign_method: SignMethod,
    /// Sign `UNSIGNED-PAYLOAD` instead of the body hash (TC3 only)
    pub unsigned_payload: bool,
    /// Language of error messages
    pub language: Language,
    /// Log every request and retry
    pub debug: bool,
    /// Skip the region circuit breaker
    pub disable_region_breaker: bool,
    /// Domain used while the breaker is open, without the service prefix
    pub backup_endpoint: Option<String>,
    /// Retry budgets
    pub retry: RetryConfig,
    /// Client side throttle
    pub rate_limiter: RateLimiterConfig,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            http_profile: HttpProfile::default(),
            sign_method: SignMethod::default(),
            unsigned_payload: false,
            language: Language::default(),
            debug: false,
            disable_region_breaker: true,
            backup_endpoint: None,
            retry: RetryConfig::disabled(),
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration, loaded from the environment
pub struct Config {
    /// Region requests are sent to
    pub region: String,
    /// Client profile
    pub profile: ClientProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the process environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `TENCENTCLOUD_REGION` | `ap-guangzhou` |
    /// | `TENCENTCLOUD_REQ_METHOD` | `POST` |
    /// | `TENCENTCLOUD_REQ_TIMEOUT` | `60` |
    /// | `TENCENTCLOUD_SCHEME` | `https` |
    /// | `TENCENTCLOUD_ROOT_DOMAIN` | `tencentcloudapi.com` |
    /// | `TENCENTCLOUD_ENDPOINT` | unset |
    /// | `TENCENTCLOUD_SIGN_METHOD` | `TC3-HMAC-SHA256` |
    /// | `TENCENTCLOUD_UNSIGNED_PAYLOAD` | `false` |
    /// | `TENCENTCLOUD_LANGUAGE` | `zh-CN` |
    /// | `TENCENTCLOUD_DEBUG` | `false` |
    /// | `TENCENTCLOUD_DISABLE_REGION_BREAKER` | `true` |
    /// | `TENCENTCLOUD_BACKUP_ENDPOINT` | unset |
    /// | `TENCENTCLOUD_RATE_LIMIT_MAX_REQUESTS` | `0` (off) |
    /// | `TENCENTCLOUD_RATE_LIMIT_PERIOD_SECONDS` | `1` |
    /// | `TENCENTCLOUD_RATE_LIMIT_BURST_SIZE` | `10` |
    ///
    /// Retry budgets are read by [`RetryConfig::default`].
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let req_method = get_env_or_default("TENCENTCLOUD_REQ_METHOD", DEFAULT_REQ_METHOD.to_string())
            .to_uppercase();
        let req_method = if req_method == "GET" || req_method == "POST" {
            req_method
        } else {
            error!("Unsupported TENCENTCLOUD_REQ_METHOD {req_method}, using POST");
            DEFAULT_REQ_METHOD.to_string()
        };

        let http_profile = HttpProfile {
            req_method,
            req_timeout: get_env_or_default("TENCENTCLOUD_REQ_TIMEOUT", DEFAULT_REQ_TIMEOUT_SECS),
            scheme: get_env_or_default("TENCENTCLOUD_SCHEME", DEFAULT_SCHEME.to_string()),
            root_domain: get_env_or_default(
                "TENCENTCLOUD_ROOT_DOMAIN",
                DEFAULT_ROOT_DOMAIN.to_string(),
            ),
            endpoint: get_env_or_none::<String>("TENCENTCLOUD_ENDPOINT").filter(|e| !e.is_empty()),
        };

        let profile = ClientProfile {
            http_profile,
            sign_method: get_env_or_default("TENCENTCLOUD_SIGN_METHOD", SignMethod::default()),
            unsigned_payload: get_env_flag("TENCENTCLOUD_UNSIGNED_PAYLOAD", false),
            language: get_env_or_default("TENCENTCLOUD_LANGUAGE", Language::default()),
            debug: get_env_flag("TENCENTCLOUD_DEBUG", false),
            disable_region_breaker: get_env_flag("TENCENTCLOUD_DISABLE_REGION_BREAKER", true),
            backup_endpoint: get_env_or_none::<String>("TENCENTCLOUD_BACKUP_ENDPOINT")
                .filter(|e| !e.is_empty()),
            retry: RetryConfig::default(),
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("TENCENTCLOUD_RATE_LIMIT_MAX_REQUESTS", 0),
                period_seconds: get_env_or_default("TENCENTCLOUD_RATE_LIMIT_PERIOD_SECONDS", 1),
                burst_size: get_env_or_default("TENCENTCLOUD_RATE_LIMIT_BURST_SIZE", 10),
            },
        };

        Config {
            region: get_env_or_default("TENCENTCLOUD_REGION", DEFAULT_REGION.to_string()),
            profile,
        }
    }
}
