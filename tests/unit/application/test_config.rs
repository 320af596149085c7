use std::env;
use tencentcloud_vpc::application::config::{
    ClientProfile, Config, HttpProfile, Language, RateLimiterConfig, SignMethod,
};
use tencentcloud_vpc::application::rate_limiter::RateLimiter;

#[test]
fn test_http_profile_defaults() {
    let profile = HttpProfile::default();
    assert_eq!(profile.req_method, "POST");
    assert_eq!(profile.req_timeout, 60);
    assert_eq!(profile.scheme, "https");
    assert_eq!(profile.root_domain, "tencentcloudapi.com");
    assert!(profile.endpoint.is_none());
    assert_eq!(profile.timeout().as_secs(), 60);
}

#[test]
fn test_client_profile_defaults() {
    let profile = ClientProfile::default();
    assert_eq!(profile.sign_method, SignMethod::Tc3HmacSha256);
    assert_eq!(profile.language, Language::ZhCn);
    assert!(!profile.unsigned_payload);
    assert!(!profile.debug);
    assert!(profile.disable_region_breaker);
    assert!(!profile.retry.is_enabled());
    assert!(!profile.rate_limiter.is_enabled());
}

#[test]
fn test_sign_method_round_trips_through_str() {
    for method in [
        SignMethod::HmacSha1,
        SignMethod::HmacSha256,
        SignMethod::Tc3HmacSha256,
    ] {
        assert_eq!(method.to_string().parse::<SignMethod>().unwrap(), method);
    }
    assert!("MD5".parse::<SignMethod>().is_err());
    assert!(SignMethod::HmacSha1.is_v1());
    assert!(!SignMethod::Tc3HmacSha256.is_v1());
}

#[test]
fn test_sign_method_serde_names() {
    assert_eq!(
        serde_json::to_string(&SignMethod::Tc3HmacSha256).unwrap(),
        "\"TC3-HMAC-SHA256\""
    );
    assert_eq!(
        serde_json::from_str::<Language>("\"en-US\"").unwrap(),
        Language::EnUs
    );
}

#[test]
fn test_rate_limiter_config_enables_limiter() {
    let disabled = RateLimiterConfig::default();
    assert!(RateLimiter::new(&disabled).is_none());

    let config = RateLimiterConfig {
        max_requests: 10,
        period_seconds: 1,
        burst_size: 2,
    };
    let limiter = RateLimiter::new(&config).expect("limiter");
    assert!(limiter.check());
    assert!(limiter.check());
    assert!(!limiter.check());
}

#[test]
fn test_config_reads_environment() {
    unsafe {
        env::set_var("TENCENTCLOUD_REGION", "ap-singapore");
        env::set_var("TENCENTCLOUD_REQ_METHOD", "get");
        env::set_var("TENCENTCLOUD_REQ_TIMEOUT", "15");
        env::set_var("TENCENTCLOUD_ENDPOINT", "vpc.internal.tencentcloudapi.com");
        env::set_var("TENCENTCLOUD_SIGN_METHOD", "HmacSHA1");
        env::set_var("TENCENTCLOUD_LANGUAGE", "en-US");
        env::set_var("TENCENTCLOUD_DISABLE_REGION_BREAKER", "false");
        env::set_var("TENCENTCLOUD_RATE_LIMIT_MAX_REQUESTS", "20");
    }
    let config = Config::new();
    unsafe {
        for name in [
            "TENCENTCLOUD_REGION",
            "TENCENTCLOUD_REQ_METHOD",
            "TENCENTCLOUD_REQ_TIMEOUT",
            "TENCENTCLOUD_ENDPOINT",
            "TENCENTCLOUD_SIGN_METHOD",
            "TENCENTCLOUD_LANGUAGE",
            "TENCENTCLOUD_DISABLE_REGION_BREAKER",
            "TENCENTCLOUD_RATE_LIMIT_MAX_REQUESTS",
        ] {
            env::remove_var(name);
        }
    }

    assert_eq!(config.region, "ap-singapore");
    let http = &config.profile.http_profile;
    assert_eq!(http.req_method, "GET");
    assert_eq!(http.req_timeout, 15);
    assert_eq!(
        http.endpoint.as_deref(),
        Some("vpc.internal.tencentcloudapi.com")
    );
    assert_eq!(config.profile.sign_method, SignMethod::HmacSha1);
    assert_eq!(config.profile.language, Language::EnUs);
    assert!(!config.profile.disable_region_breaker);
    assert_eq!(config.profile.rate_limiter.max_requests, 20);
    assert_eq!(config.profile.rate_limiter.burst_size, 10);
}
