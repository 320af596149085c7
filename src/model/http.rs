use crate::application::rate_limiter::RateLimiter;
use crate::constants::{CLIENT_ERROR_NETWORK, CODE_LIMIT_EXCEEDED};
use crate::error::{AppError, SdkError, TcResult};
use crate::model::response::parse_error;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, error, warn};

/// A fully signed request, ready for the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Body, `None` for GET
    pub body: Option<String>,
}

/// Status and body of a reply
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status
    pub status: StatusCode,
    /// Raw body
    pub body: Vec<u8>,
}

/// Behaviour of [`make_http_request`]
#[derive(Debug, Clone, Copy)]
pub struct SendOptions<'a> {
    /// Throttle to wait on before each attempt
    pub rate_limiter: Option<&'a RateLimiter>,
    /// Retry budgets
    pub retry: &'a RetryConfig,
    /// Whether network failures may be retried
    pub idempotent: bool,
    /// Log requests, replies and retries
    pub debug: bool,
}

/// Sends a request with throttling and the two retry loops
///
/// The outer loop re-sends requests answered with `RequestLimitExceeded`, the
/// inner loop re-sends idempotent requests hit by a timeout or a connection
/// failure. When every network attempt fails the error becomes
/// `ClientError.NetworkError`.
///
/// # Example
///
/// ```ignore
/// let reply = make_http_request(
///     &client,
///     &PreparedRequest {
///         method: Method::POST,
///         url: "https://vpc.tencentcloudapi.com/".to_string(),
///         headers: vec![("Content-Type".to_string(), "application/json".to_string())],
///         body: Some("{}".to_string()),
///     },
///     SendOptions { rate_limiter: None, retry: &RetryConfig::disabled(), idempotent: false, debug: false },
/// )
/// .await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    request: &PreparedRequest,
    options: SendOptions<'_>,
) -> TcResult<HttpReply> {
    let max_retries = options.retry.rate_limit_exceeded_max_retries;
    let mut attempt = 0;

    loop {
        let reply = send_with_network_failure_retry(client, request, options).await?;

        let throttled = match parse_error(&reply.body) {
            Err(AppError::Sdk(e)) if e.code == CODE_LIMIT_EXCEEDED => Some(e),
            _ => None,
        };

        if let Some(e) = throttled.filter(|_| attempt < max_retries) {
            let delay = options
                .retry
                .rate_limit_exceeded_retry_duration
                .delay(attempt);
            if options.debug {
                warn!(
                    "rate limit exceeded, retrying ({}/{}) in {} seconds: {}",
                    attempt,
                    max_retries,
                    delay.as_secs_f64(),
                    e
                );
            }
            tokio::time::sleep(delay).await;
            attempt += 1;
            continue;
        }

        return Ok(reply);
    }
}

async fn send_with_network_failure_retry(
    client: &Client,
    request: &PreparedRequest,
    options: SendOptions<'_>,
) -> TcResult<HttpReply> {
    let max_retries = if options.idempotent {
        options.retry.network_failure_max_retries
    } else {
        0
    };
    let mut attempt = 0;

    loop {
        match send_once(client, request, options).await {
            Ok(reply) => return Ok(reply),
            Err(e) if attempt < max_retries && (e.is_timeout() || e.is_connect()) => {
                let delay = options
                    .retry
                    .network_failure_retry_duration
                    .delay(attempt);
                if options.debug {
                    warn!(
                        "temporary network failure, retrying ({}/{}) in {} seconds: {}",
                        attempt,
                        max_retries,
                        delay.as_secs_f64(),
                        e
                    );
                }
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!("{} {} failed: {}", request.method, request.url, e);
                return Err(SdkError::client(
                    CLIENT_ERROR_NETWORK,
                    format!("Fail to get response because {e}"),
                )
                .into());
            }
        }
    }
}

async fn send_once(
    client: &Client,
    request: &PreparedRequest,
    options: SendOptions<'_>,
) -> Result<HttpReply, reqwest::Error> {
    if let Some(limiter) = options.rate_limiter {
        limiter.wait().await;
    }

    debug!("{} {}", request.method, request.url);
    if options.debug {
        debug!("http request headers = {:?}", request.headers);
        if let Some(body) = &request.body {
            debug!("http request body = {}", body);
        }
    }

    let mut builder = client.request(request.method.clone(), &request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.clone());
    }

    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?.to_vec();
    debug!("Response status: {}", status);
    if options.debug {
        debug!("http response = {}", String::from_utf8_lossy(&body));
    }

    Ok(HttpReply { status, body })
}
