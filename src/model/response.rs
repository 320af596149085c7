use crate::error::{AppError, SdkError, TcResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{"Response": {...}}` envelope wrapping every reply
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(rename = "Response")]
    response: T,
}

/// `Response.Error` of a failed call
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Error code
    #[serde(rename = "Code", default)]
    pub code: String,
    /// Error message
    #[serde(rename = "Message", default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorProbe {
    #[serde(rename = "Error")]
    error: Option<ErrorBody>,
    #[serde(rename = "RequestId", default)]
    request_id: String,
}

/// Looks for `Response.Error` in a reply body
///
/// Returns `Ok(())` when the body is a well formed envelope without error,
/// `AppError::Sdk` when the server reported one and `AppError::Json` when the
/// body is not an envelope at all.
pub fn parse_error(body: &[u8]) -> TcResult<()> {
    let envelope: Envelope<ErrorProbe> = serde_json::from_slice(body)?;
    match envelope.response.error {
        Some(error) if !error.code.is_empty() => Err(SdkError::new(
            error.code,
            error.message,
            envelope.response.request_id,
        )
        .into()),
        _ => Ok(()),
    }
}

/// Decodes a reply into the typed response of an action
pub fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> TcResult<T> {
    if status != StatusCode::OK {
        return Err(AppError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    parse_error(body)?;
    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.response)
}

/// Untyped response of a [`crate::model::request::CommonRequest`]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct CommonResponse {
    response: Map<String, Value>,
}

impl CommonResponse {
    /// Fields of the `Response` object
    #[must_use]
    pub fn response(&self) -> &Map<String, Value> {
        &self.response
    }

    /// One field of the `Response` object
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.response.get(key)
    }

    /// Request id assigned by the server
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response.get("RequestId").and_then(Value::as_str)
    }

    /// The reply re-wrapped as `{"Response": {...}}`
    pub fn to_json_string(&self) -> TcResult<String> {
        let mut root = Map::new();
        root.insert("Response".to_string(), Value::Object(self.response.clone()));
        Ok(serde_json::to_string(&root)?)
    }
}
