use crate::constants::{CLIENT_ERROR_INVALID_PARAMETER, CLIENT_ERROR_PARSE_JSON, REQUEST_CLIENT};
use crate::error::{AppError, SdkError, TcResult};
use crate::utils::id::random_nonce;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Common parameters that travel as headers in signature v3 and never in the
/// canonical query string
pub const COMMON_PARAM_KEYS: [&str; 6] = [
    "Action",
    "Version",
    "Nonce",
    "Region",
    "RequestClient",
    "Timestamp",
];

/// Cancellation and deadline attached to a request
///
/// The default context never cancels and has no deadline. Clones share the
/// same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context without cancellation or deadline
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Context bound to an existing cancellation token
    #[must_use]
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets a deadline `timeout` from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cancels every request carrying this context
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the context was cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Deadline, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Underlying cancellation token
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Drives `fut` unless the context is cancelled or its deadline passes first
    pub async fn run<T, F>(&self, fut: F) -> TcResult<T>
    where
        F: Future<Output = TcResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        let guarded = async {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => Err(AppError::Cancelled),
                result = fut => result,
            }
        };
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .unwrap_or_else(|_| Err(AppError::Timeout)),
            None => guarded.await,
        }
    }
}

/// Routing and common parameters shared by every request
#[derive(Debug, Clone, Default)]
pub struct BaseRequest {
    service: String,
    version: String,
    action: String,
    /// Full domain, e.g. `vpc.tencentcloudapi.com`; filled by the client when empty
    pub domain: String,
    /// Root domain; filled by the client when empty
    pub root_domain: String,
    /// URL scheme; filled by the client when empty
    pub scheme: String,
    /// HTTP method; filled by the client when empty
    pub http_method: String,
    /// URL path
    pub path: String,
    params: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    timestamp: i64,
    context: RequestContext,
}

impl BaseRequest {
    /// Binds a request to `(service, version, action)`
    pub fn new(
        service: impl Into<String>,
        version: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            action: action.into(),
            path: "/".to_string(),
            ..Self::default()
        }
    }

    /// Service name
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// API version
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Action name
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Common parameters completed so far
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Custom headers
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Adds a custom header; built-in `X-TC-*` headers cannot be overridden
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Unix timestamp stamped by [`Self::complete_common_params`]
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Context honoured while sending
    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Replaces the context
    pub fn set_context(&mut self, context: RequestContext) {
        self.context = context;
    }

    /// `<scheme>://<domain><path>`
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.domain, self.path)
    }

    /// Stamps `Action`, `Version`, `Region`, `Timestamp`, `Nonce` and `RequestClient`
    pub fn complete_common_params(&mut self, region: &str) {
        self.timestamp = Utc::now().timestamp();
        self.params.insert("Action".into(), self.action.clone());
        self.params.insert("Version".into(), self.version.clone());
        if !region.is_empty() {
            self.params.insert("Region".into(), region.to_string());
        }
        self.params
            .insert("Timestamp".into(), self.timestamp.to_string());
        self.params
            .insert("Nonce".into(), random_nonce().to_string());
        self.params
            .insert("RequestClient".into(), REQUEST_CLIENT.to_string());
    }
}

/// A request the generic client can send
///
/// Implementors serialize to the action parameters (PascalCase keys, unset
/// optional fields omitted) and carry a [`BaseRequest`] that is skipped by
/// serde.
pub trait ApiRequest: Serialize + Send + Sync {
    /// Routing and common parameters
    fn base(&self) -> &BaseRequest;

    /// Mutable routing and common parameters
    fn base_mut(&mut self) -> &mut BaseRequest;

    /// The `ClientToken` slot of idempotent actions
    fn client_token_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }

    /// Whether the action carries a `ClientToken`, which makes network retries safe
    fn is_idempotent(&self) -> bool {
        false
    }

    /// Attaches a context to the request
    fn set_context(&mut self, context: RequestContext) {
        self.base_mut().set_context(context);
    }

    /// Action parameters as JSON
    fn to_json_value(&self) -> TcResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Action parameters as a JSON document, the body of a POST
    fn to_json_string(&self) -> TcResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Flattens action parameters into the `Filters.0.Values.1` form
///
/// Arrays are indexed from zero, nulls are dropped and booleans render as
/// `true` / `false`.
#[must_use]
pub fn flatten_params(value: &Value) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten_into(&mut out, String::new(), value);
    out
}

fn child_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(out, child_key(&prefix, &i.to_string()), item);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(out, child_key(&prefix, k), v);
            }
        }
    }
}

/// Implements `new()` and [`ApiRequest`] for a request struct with a `base` field
///
/// The `client_token` form also wires the `client_token` field so the client
/// can inject an idempotency token.
macro_rules! impl_api_request {
    ($ty:ident, $service:expr, $version:expr, $action:literal) => {
        impl $ty {
            #[doc = concat!("Creates an empty `", $action, "` request")]
            #[must_use]
            pub fn new() -> Self {
                Self {
                    base: $crate::model::request::BaseRequest::new($service, $version, $action),
                    ..Default::default()
                }
            }
        }

        impl $crate::model::request::ApiRequest for $ty {
            fn base(&self) -> &$crate::model::request::BaseRequest {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::request::BaseRequest {
                &mut self.base
            }
        }
    };
    ($ty:ident, $service:expr, $version:expr, $action:literal, client_token) => {
        impl $ty {
            #[doc = concat!("Creates an empty `", $action, "` request")]
            #[must_use]
            pub fn new() -> Self {
                Self {
                    base: $crate::model::request::BaseRequest::new($service, $version, $action),
                    ..Default::default()
                }
            }
        }

        impl $crate::model::request::ApiRequest for $ty {
            fn base(&self) -> &$crate::model::request::BaseRequest {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::request::BaseRequest {
                &mut self.base
            }

            fn client_token_mut(&mut self) -> Option<&mut Option<String>> {
                Some(&mut self.client_token)
            }

            fn is_idempotent(&self) -> bool {
                true
            }
        }
    };
}

pub(crate) use impl_api_request;

/// Input accepted by [`CommonRequest::set_action_parameters`]
#[derive(Debug, Clone)]
pub enum ActionParameters {
    /// A JSON document
    Json(String),
    /// A JSON document as raw bytes
    Bytes(Vec<u8>),
    /// A JSON value, which must be an object
    Value(Value),
}

impl From<&str> for ActionParameters {
    fn from(s: &str) -> Self {
        ActionParameters::Json(s.to_string())
    }
}

impl From<String> for ActionParameters {
    fn from(s: String) -> Self {
        ActionParameters::Json(s)
    }
}

impl From<Vec<u8>> for ActionParameters {
    fn from(b: Vec<u8>) -> Self {
        ActionParameters::Bytes(b)
    }
}

impl From<&[u8]> for ActionParameters {
    fn from(b: &[u8]) -> Self {
        ActionParameters::Bytes(b.to_vec())
    }
}

impl From<Value> for ActionParameters {
    fn from(v: Value) -> Self {
        ActionParameters::Value(v)
    }
}

impl From<Map<String, Value>> for ActionParameters {
    fn from(m: Map<String, Value>) -> Self {
        ActionParameters::Value(Value::Object(m))
    }
}

/// Request for any action of any service, with untyped parameters
///
/// ```
/// use tencentcloud_vpc::model::request::CommonRequest;
///
/// let mut request = CommonRequest::new("vpc", "2017-03-12", "DescribeVpcs");
/// request.set_action_parameters(r#"{"Limit": "10"}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommonRequest {
    #[serde(skip)]
    base: BaseRequest,
    #[serde(flatten)]
    params: Map<String, Value>,
}

impl CommonRequest {
    /// Creates a request bound to `(service, version, action)`
    pub fn new(
        service: impl Into<String>,
        version: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseRequest::new(service, version, action),
            params: Map::new(),
        }
    }

    /// Replaces the action parameters
    ///
    /// Fails with `ClientError.ParseJsonError` on malformed JSON and with
    /// `ClientError.InvalidParameter` when the document is not an object.
    pub fn set_action_parameters(&mut self, data: impl Into<ActionParameters>) -> TcResult<()> {
        let value = match data.into() {
            ActionParameters::Json(s) => parse_json(s.as_bytes())?,
            ActionParameters::Bytes(b) => parse_json(&b)?,
            ActionParameters::Value(v) => v,
        };
        match value {
            Value::Object(map) => {
                self.params = map;
                Ok(())
            }
            other => Err(SdkError::client(
                CLIENT_ERROR_INVALID_PARAMETER,
                format!("Invalid data type: expected a JSON object, got {other}"),
            )
            .into()),
        }
    }

    /// Action parameters
    #[must_use]
    pub fn action_parameters(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Adds a custom header
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.base.set_header(name, value);
    }
}

fn parse_json(raw: &[u8]) -> TcResult<Value> {
    serde_json::from_slice(raw).map_err(|e| {
        SdkError::client(
            CLIENT_ERROR_PARSE_JSON,
            format!(
                "Fail to parse contents {} to json, because: {}",
                String::from_utf8_lossy(raw),
                e
            ),
        )
        .into()
    })
}

impl ApiRequest for CommonRequest {
    fn base(&self) -> &BaseRequest {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRequest {
        &mut self.base
    }
}
