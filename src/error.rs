//! Error types returned by the client.
//!
//! Remote failures keep the code, message and request id sent by the cloud
//! control plane in [`SdkError`]; the crate never interprets per-action codes.

use reqwest::StatusCode;
use std::fmt;

/// Error carrying a Tencent Cloud error code
///
/// Produced either by the remote service (`Response.Error` in the reply) or
/// locally with one of the `ClientError.*` codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkError {
    /// Error code, e.g. `InvalidParameterValue.Malformed`
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Request id assigned by the server, empty for local errors
    pub request_id: String,
}

impl SdkError {
    /// Creates a new SDK error
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: request_id.into(),
        }
    }

    /// Creates an error raised on the client side, without request id
    pub fn client(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, "")
    }

    /// Error code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Request id, empty when the error never reached the server
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.request_id.is_empty() {
            write!(
                f,
                "[TencentCloudSDKError] Code={}, Message={}",
                self.code, self.message
            )
        } else {
            write!(
                f,
                "[TencentCloudSDKError] Code={}, Message={}, RequestId={}",
                self.code, self.message, self.request_id
            )
        }
    }
}

impl std::error::Error for SdkError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// An action was invoked on a client without credential
    MissingCredential {
        /// Name of the action, e.g. `CreateVpc`
        action: String,
    },
    /// Error code returned by the service or raised by the SDK
    Sdk(SdkError),
    /// The server answered with a non 200 status
    Http {
        /// HTTP status
        status: StatusCode,
        /// Raw body of the reply
        body: String,
    },
    /// Transport level failure that is not a network error, e.g. a bad URL
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Local I/O failure
    Io(std::io::Error),
    /// The request context was cancelled
    Cancelled,
    /// The request context deadline elapsed
    Timeout,
    /// A caller supplied value was rejected before sending
    InvalidInput(String),
    /// A credential provider has nothing to offer; chains move to the next one
    CredentialUnavailable(String),
    /// The instance metadata service could not be read
    Metadata(String),
    /// No route table exists in the given VPC
    NoRouteTable(String),
}

impl AppError {
    /// Returns the Tencent Cloud error code when this is an SDK error
    #[must_use]
    pub fn sdk_code(&self) -> Option<&str> {
        match self {
            AppError::Sdk(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Returns the request id when the server assigned one
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AppError::Sdk(e) if !e.request_id.is_empty() => Some(e.request_id()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredential { action } => write!(f, "{action} require credential"),
            AppError::Sdk(e) => write!(f, "{e}"),
            AppError::Http { status, body } => write!(
                f,
                "request fail with http status code: {status}, with body: {body}"
            ),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Cancelled => write!(f, "request cancelled"),
            AppError::Timeout => write!(f, "request timed out"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::CredentialUnavailable(msg) => write!(f, "credential unavailable: {msg}"),
            AppError::Metadata(msg) => write!(f, "metadata error: {msg}"),
            AppError::NoRouteTable(vpc_id) => {
                write!(f, "no suitable route table found in {vpc_id}")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Sdk(e) => Some(e),
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SdkError> for AppError {
    fn from(e: SdkError) -> Self {
        AppError::Sdk(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Result alias used across the crate
pub type TcResult<T> = Result<T, AppError>;
