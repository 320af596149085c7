use std::env;
use std::time::Duration;
use tencentcloud_vpc::model::retry::{RetryConfig, RetryDuration};

#[test]
fn test_exponential_delay() {
    let d = RetryDuration::Exponential;
    assert_eq!(d.delay(0), Duration::from_secs(1));
    assert_eq!(d.delay(1), Duration::from_secs(2));
    assert_eq!(d.delay(3), Duration::from_secs(8));
}

#[test]
fn test_constant_delay() {
    let d = RetryDuration::Constant(Duration::from_millis(250));
    assert_eq!(d.delay(0), Duration::from_millis(250));
    assert_eq!(d.delay(7), Duration::from_millis(250));
}

#[test]
fn test_disabled_config() {
    let config = RetryConfig::disabled();
    assert_eq!(config.network_failure_max_retries, 0);
    assert_eq!(config.rate_limit_exceeded_max_retries, 0);
    assert!(!config.is_enabled());
}

#[test]
fn test_builder_methods_enable_retries() {
    let config = RetryConfig::disabled()
        .with_rate_limit_retries(3, RetryDuration::Constant(Duration::ZERO));
    assert!(config.is_enabled());
    assert_eq!(config.rate_limit_exceeded_max_retries, 3);
    assert_eq!(config.network_failure_max_retries, 0);

    let config = RetryConfig::disabled()
        .with_network_failure_retries(2, RetryDuration::Exponential);
    assert!(config.is_enabled());
    assert_eq!(config.network_failure_max_retries, 2);
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("TENCENTCLOUD_NETWORK_FAILURE_MAX_RETRIES", "4");
        env::set_var("TENCENTCLOUD_RATE_LIMIT_MAX_RETRIES", "2");
        env::set_var("TENCENTCLOUD_RETRY_DELAY_SECS", "3");
    }
    let config = RetryConfig::new();
    unsafe {
        env::remove_var("TENCENTCLOUD_NETWORK_FAILURE_MAX_RETRIES");
        env::remove_var("TENCENTCLOUD_RATE_LIMIT_MAX_RETRIES");
        env::remove_var("TENCENTCLOUD_RETRY_DELAY_SECS");
    }

    assert_eq!(config.network_failure_max_retries, 4);
    assert_eq!(config.rate_limit_exceeded_max_retries, 2);
    assert_eq!(
        config.network_failure_retry_duration,
        RetryDuration::Constant(Duration::from_secs(3))
    );
}
