//! Generic RPC client
//!
//! Every Tencent Cloud action goes through [`Client::send`]: the request is
//! completed with the common parameters, signed, sent with throttling and
//! retries, optionally through the region circuit breaker, and the reply is
//! decoded from its `{"Response": {...}}` envelope.

use crate::application::circuit_breaker::RegionBreaker;
use crate::application::config::{ClientProfile, SignMethod};
use crate::application::rate_limiter::RateLimiter;
use crate::application::signer::{
    Tc3Input, UNSIGNED_PAYLOAD, encode_query, sha256_hex, sign_v1, v1_string_to_sign,
};
use crate::constants::{CODE_INTERNAL_ERROR, DEFAULT_BACKUP_ENDPOINT, USER_AGENT};
use crate::credential::{Credential, CredentialSource, Provider, default_provider_chain};
use crate::error::{AppError, TcResult};
use crate::model::http::{PreparedRequest, SendOptions, make_http_request};
use crate::model::request::{ApiRequest, COMMON_PARAM_KEYS, flatten_params};
use crate::model::response::parse_response;
use crate::utils::id::random_client_token;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Headers set by the client that callers cannot override
const BUILTIN_HEADERS: [&str; 8] = [
    "X-TC-Action",
    "X-TC-Version",
    "X-TC-Timestamp",
    "X-TC-RequestClient",
    "X-TC-Language",
    "Content-Type",
    "X-TC-Region",
    "X-TC-Token",
];

/// Generic client for any Tencent Cloud service
///
/// Cheap to clone: the HTTP pool, throttle and breaker are shared.
#[derive(Clone)]
pub struct Client {
    region: String,
    http_client: reqwest::Client,
    credential: Option<Arc<dyn CredentialSource>>,
    profile: ClientProfile,
    rate_limiter: Option<RateLimiter>,
    breaker: Option<Arc<RegionBreaker>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("region", &self.region)
            .field("credential", &self.credential)
            .field("profile", &self.profile)
            .field("rate_limiter", &self.rate_limiter)
            .field("breaker", &self.breaker)
            .finish()
    }
}

fn build_http_client(profile: &ClientProfile) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(profile.http_profile.timeout())
        .build()
        .unwrap_or_else(|e| {
            error!("Failed to build HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        })
}

impl Client {
    /// Client for `region` with the default profile and no credential
    pub fn init(region: impl Into<String>) -> Self {
        let profile = ClientProfile::default();
        Self {
            region: region.into(),
            http_client: build_http_client(&profile),
            credential: None,
            profile,
            rate_limiter: None,
            breaker: None,
        }
    }

    /// Sets a static credential
    #[must_use]
    pub fn with_credential(self, credential: Credential) -> Self {
        self.with_credential_source(Arc::new(credential))
    }

    /// Sets any credential source, e.g. one returned by a [`Provider`]
    #[must_use]
    pub fn with_credential_source(mut self, credential: Arc<dyn CredentialSource>) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Sets a static credential from a secret id and key
    #[must_use]
    pub fn with_secret_id(self, secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.with_credential(Credential::new(secret_id, secret_key))
    }

    /// Applies a profile
    ///
    /// Rebuilds the HTTP client with the profile timeout, the throttle, and
    /// the region breaker unless the profile disables it.
    #[must_use]
    pub fn with_profile(mut self, profile: ClientProfile) -> Self {
        self.http_client = build_http_client(&profile);
        self.rate_limiter = RateLimiter::new(&profile.rate_limiter);
        self.breaker = (!profile.disable_region_breaker).then(|| {
            let backup = profile
                .backup_endpoint
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_BACKUP_ENDPOINT.to_string());
            Arc::new(RegionBreaker::with_backup_endpoint(backup))
        });
        self.profile = profile;
        self
    }

    /// Resolves a credential through `provider`
    pub async fn with_provider(self, provider: &dyn Provider) -> TcResult<Self> {
        let credential = provider.get_credential().await?;
        Ok(self.with_credential_source(credential))
    }

    /// Turns request and retry logging on or off
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.profile.debug = debug;
        self
    }

    /// Selects the signature algorithm
    #[must_use]
    pub fn with_signature_method(mut self, method: SignMethod) -> Self {
        self.profile.sign_method = method;
        self
    }

    /// Uses a caller supplied HTTP client
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Credential source, `None` for anonymous clients
    #[must_use]
    pub fn credential(&self) -> Option<&Arc<dyn CredentialSource>> {
        self.credential.as_ref()
    }

    /// Region requests are sent to
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Active profile
    #[must_use]
    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    /// Region breaker, when enabled
    #[must_use]
    pub fn breaker(&self) -> Option<&Arc<RegionBreaker>> {
        self.breaker.as_ref()
    }

    /// Sends `request` and decodes the typed response
    ///
    /// The request's context is honoured: a cancelled context fails with
    /// [`AppError::Cancelled`] and a passed deadline with [`AppError::Timeout`].
    pub async fn send<R, T>(&self, request: &mut R) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        self.complete_request(request);
        let context = request.base().context().clone();
        context.run(self.dispatch(&*request)).await
    }

    fn complete_request<R: ApiRequest>(&self, request: &mut R) {
        let http_profile = &self.profile.http_profile;
        let base = request.base_mut();
        if base.scheme.is_empty() {
            base.scheme = http_profile.scheme.clone();
        }
        if base.root_domain.is_empty() {
            base.root_domain = http_profile.root_domain.clone();
        }
        if base.domain.is_empty() {
            base.domain = match &http_profile.endpoint {
                Some(endpoint) if !endpoint.is_empty() => endpoint.clone(),
                _ => format!("{}.{}", base.service(), base.root_domain),
            };
        }
        if base.http_method.is_empty() {
            base.http_method = http_profile.req_method.clone();
        }
        base.http_method = base.http_method.to_uppercase();
        base.complete_common_params(&self.region);

        if !self.profile.retry.is_enabled() {
            return;
        }
        if let Some(token) = request.client_token_mut() {
            if token.as_deref().is_none_or(str::is_empty) {
                *token = Some(random_client_token());
            }
        }
    }

    async fn dispatch<R, T>(&self, request: &R) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let Some(source) = &self.credential else {
            return self.send_without_signature(request).await;
        };
        let credential = source.resolve().await?;
        match &self.breaker {
            Some(breaker) if !self.profile.disable_region_breaker => {
                self.send_with_region_breaker(breaker, request, &credential)
                    .await
            }
            _ => self.send_with_signature(request, &credential, None).await,
        }
    }

    async fn send_with_region_breaker<R, T>(
        &self,
        breaker: &RegionBreaker,
        request: &R,
        credential: &Credential,
    ) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let (generation, open) = breaker.before_request()?;
        let backup_domain = open.then(|| {
            format!(
                "{}.{}",
                request.base().service(),
                breaker.backup_endpoint()
            )
        });
        let result = self
            .send_with_signature(request, credential, backup_domain.as_deref())
            .await;
        let success = match &result {
            Ok(_) => true,
            Err(AppError::Sdk(e)) => !e.request_id.is_empty() && e.code != CODE_INTERNAL_ERROR,
            Err(_) => false,
        };
        breaker.after_request(generation, success)?;
        result
    }

    async fn send_with_signature<R, T>(
        &self,
        request: &R,
        credential: &Credential,
        domain: Option<&str>,
    ) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let prepared = if self.profile.sign_method.is_v1() {
            self.prepare_v1(request, credential, domain)?
        } else {
            self.prepare_tc3(request, Some(credential), domain)?
        };
        self.execute(request, &prepared).await
    }

    async fn send_without_signature<R, T>(&self, request: &R) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let prepared = self.prepare_tc3(request, None, None)?;
        self.execute(request, &prepared).await
    }

    async fn execute<R, T>(&self, request: &R, prepared: &PreparedRequest) -> TcResult<T>
    where
        R: ApiRequest,
        T: DeserializeOwned,
    {
        let reply = make_http_request(
            &self.http_client,
            prepared,
            SendOptions {
                rate_limiter: self.rate_limiter.as_ref(),
                retry: &self.profile.retry,
                idempotent: request.is_idempotent(),
                debug: self.profile.debug,
            },
        )
        .await?;
        parse_response(reply.status, &reply.body)
    }

    fn http_method<R: ApiRequest>(request: &R) -> TcResult<Method> {
        let raw = &request.base().http_method;
        Method::from_bytes(raw.as_bytes())
            .map_err(|_| AppError::InvalidInput(format!("invalid http method {raw}")))
    }

    fn custom_headers<R: ApiRequest>(request: &R) -> Vec<(String, String)> {
        request
            .base()
            .headers()
            .iter()
            .filter(|(name, _)| {
                let builtin = BUILTIN_HEADERS
                    .iter()
                    .any(|b| b.eq_ignore_ascii_case(name));
                if builtin {
                    warn!("Skip header \"{}\": can not specify built-in header", name);
                }
                !builtin
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Builds a signature v3 request; without credential it is sent with
    /// `Authorization: SKIP`
    fn prepare_tc3<R: ApiRequest>(
        &self,
        request: &R,
        credential: Option<&Credential>,
        domain: Option<&str>,
    ) -> TcResult<PreparedRequest> {
        let base = request.base();
        let method = Self::http_method(request)?;
        let domain = domain.unwrap_or(&base.domain);
        let is_get = method == Method::GET;
        let content_type = if is_get {
            CONTENT_TYPE_FORM
        } else {
            CONTENT_TYPE_JSON
        };

        let mut headers: Vec<(String, String)> = vec![
            ("Host".into(), domain.to_string()),
            ("X-TC-Action".into(), base.action().to_string()),
            ("X-TC-Version".into(), base.version().to_string()),
            ("X-TC-Timestamp".into(), base.timestamp().to_string()),
            (
                "X-TC-RequestClient".into(),
                base.params()
                    .get("RequestClient")
                    .cloned()
                    .unwrap_or_default(),
            ),
            (
                "X-TC-Language".into(),
                self.profile.language.as_str().to_string(),
            ),
        ];
        if !self.region.is_empty() {
            headers.push(("X-TC-Region".into(), self.region.clone()));
        }
        if let Some(token) = credential.map(Credential::token).filter(|t| !t.is_empty()) {
            headers.push(("X-TC-Token".into(), token.to_string()));
        }
        headers.push(("Content-Type".into(), content_type.to_string()));
        headers.extend(Self::custom_headers(request));

        let (canonical_query, payload) = if is_get {
            let mut params = base.params().clone();
            params.extend(flatten_params(&request.to_json_value()?));
            for key in COMMON_PARAM_KEYS {
                params.remove(key);
            }
            (encode_query(&params), String::new())
        } else {
            (String::new(), request.to_json_string()?)
        };

        match credential {
            Some(credential) => {
                let hashed_payload = if self.profile.unsigned_payload {
                    headers.push(("X-TC-Content-SHA256".into(), UNSIGNED_PAYLOAD.into()));
                    sha256_hex(UNSIGNED_PAYLOAD.as_bytes())
                } else {
                    sha256_hex(payload.as_bytes())
                };
                let input = Tc3Input {
                    method: method.as_str(),
                    canonical_query: &canonical_query,
                    content_type,
                    host: domain,
                    hashed_payload: &hashed_payload,
                    service: base.service(),
                    timestamp: base.timestamp(),
                };
                headers.push((
                    "Authorization".into(),
                    input.authorization(&credential.secret_id, &credential.secret_key),
                ));
            }
            None => headers.push(("Authorization".into(), "SKIP".into())),
        }

        let mut url = format!("{}://{}{}", base.scheme, domain, base.path);
        if !canonical_query.is_empty() {
            url.push('?');
            url.push_str(&canonical_query);
        }

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body: (!is_get).then_some(payload),
        })
    }

    /// Builds a legacy `HmacSHA1` / `HmacSHA256` request
    fn prepare_v1<R: ApiRequest>(
        &self,
        request: &R,
        credential: &Credential,
        domain: Option<&str>,
    ) -> TcResult<PreparedRequest> {
        let base = request.base();
        let method = Self::http_method(request)?;
        let domain = domain.unwrap_or(&base.domain);
        let sign_method = self.profile.sign_method;

        let mut params = base.params().clone();
        params.extend(flatten_params(&request.to_json_value()?));
        params.insert(
            "Language".into(),
            self.profile.language.as_str().to_string(),
        );
        params.insert("SecretId".into(), credential.secret_id.clone());
        params.insert("SignatureMethod".into(), sign_method.as_str().to_string());
        if !credential.token().is_empty() {
            params.insert("Token".into(), credential.token().to_string());
        }
        params.remove("Signature");

        let string_to_sign = v1_string_to_sign(method.as_str(), domain, &base.path, &params);
        params.insert(
            "Signature".into(),
            sign_v1(&string_to_sign, &credential.secret_key, sign_method),
        );

        let mut headers = Self::custom_headers(request);
        let encoded = encode_query(&params);
        let mut url = format!("{}://{}{}", base.scheme, domain, base.path);
        let body = if method == Method::GET {
            url.push('?');
            url.push_str(&encoded);
            None
        } else {
            headers.push(("Content-Type".into(), CONTENT_TYPE_FORM.into()));
            Some(encoded)
        };

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

/// Client signing with a long term secret id and key
pub fn new_client_with_secret_id(
    secret_id: impl Into<String>,
    secret_key: impl Into<String>,
    region: impl Into<String>,
) -> Client {
    Client::init(region).with_secret_id(secret_id, secret_key)
}

/// Client whose credential is discovered by `providers`, tried in order
///
/// An empty list falls back to the default chain: environment, credentials
/// file, then CVM role.
pub async fn new_client_with_providers(
    region: impl Into<String>,
    providers: Vec<Box<dyn Provider>>,
) -> TcResult<Client> {
    let client = Client::init(region);
    if providers.is_empty() {
        client.with_provider(&default_provider_chain()).await
    } else {
        client
            .with_provider(&crate::credential::ProviderChain::new(providers))
            .await
    }
}
