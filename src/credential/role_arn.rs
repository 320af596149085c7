use crate::application::client::Client;
use crate::application::config::ClientProfile;
use crate::constants::{
    CLIENT_ERROR_CREDENTIAL, STS_API_VERSION, STS_DEFAULT_DURATION_SECS, STS_ENDPOINT,
    STS_MAX_DURATION_SECS, STS_REGION, STS_SERVICE,
};
use crate::credential::{
    Credential, CredentialSource, Provider, Refresh, RefreshingCredential, TemporaryCredential,
};
use crate::error::{SdkError, TcResult};
use crate::model::request::CommonRequest;
use crate::model::response::CommonResponse;
use crate::utils::id::default_role_session_name;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Temporary credential of an assumed role
pub type RoleArnCredential = RefreshingCredential<RoleArnProvider>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AssumeRoleCredentials {
    #[serde(default)]
    token: String,
    #[serde(default)]
    tmp_secret_id: String,
    #[serde(default)]
    tmp_secret_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AssumeRoleResponse {
    credentials: AssumeRoleCredentials,
    #[serde(default)]
    expired_time: i64,
}

/// Assumes a CAM role through STS with long term keys
#[derive(Debug, Clone)]
pub struct RoleArnProvider {
    long_term: Credential,
    role_arn: String,
    role_session_name: String,
    duration_seconds: i64,
    profile: ClientProfile,
}

impl RoleArnProvider {
    /// Provider with an explicit session name and duration
    pub fn new(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        role_arn: impl Into<String>,
        role_session_name: impl Into<String>,
        duration_seconds: i64,
    ) -> Self {
        let mut profile = ClientProfile::default();
        profile.http_profile.endpoint = Some(STS_ENDPOINT.to_string());
        profile.http_profile.req_method = "POST".to_string();
        Self {
            long_term: Credential::new(secret_id, secret_key),
            role_arn: role_arn.into(),
            role_session_name: role_session_name.into(),
            duration_seconds,
            profile,
        }
    }

    /// Provider with a generated session name and a two hour duration
    pub fn with_defaults(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        role_arn: impl Into<String>,
    ) -> Self {
        Self::new(
            secret_id,
            secret_key,
            role_arn,
            default_role_session_name(),
            STS_DEFAULT_DURATION_SECS,
        )
    }

    /// Replaces the profile of the STS client
    #[must_use]
    pub fn with_profile(mut self, profile: ClientProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Session name sent to STS
    #[must_use]
    pub fn role_session_name(&self) -> &str {
        &self.role_session_name
    }
}

#[async_trait]
impl Refresh for RoleArnProvider {
    async fn fetch(&self) -> TcResult<TemporaryCredential> {
        if self.duration_seconds <= 0 || self.duration_seconds > STS_MAX_DURATION_SECS {
            return Err(SdkError::client(
                CLIENT_ERROR_CREDENTIAL,
                "Assume Role durationSeconds should be in the range of 0~43200s",
            )
            .into());
        }

        let client = Client::init(STS_REGION)
            .with_credential(self.long_term.clone())
            .with_profile(self.profile.clone());

        let mut request = CommonRequest::new(STS_SERVICE, STS_API_VERSION, "AssumeRole");
        request.set_action_parameters(json!({
            "RoleArn": self.role_arn,
            "RoleSessionName": self.role_session_name,
            "DurationSeconds": self.duration_seconds,
        }))?;

        let response: CommonResponse = client.send(&mut request).await?;
        let assumed: AssumeRoleResponse =
            serde_json::from_value(Value::Object(response.response().clone()))
                .map_err(|e| SdkError::client(CLIENT_ERROR_CREDENTIAL, e.to_string()))?;

        Ok(TemporaryCredential {
            credential: Credential::with_token(
                assumed.credentials.tmp_secret_id,
                assumed.credentials.tmp_secret_key,
                assumed.credentials.token,
            ),
            // keys are renewed once a tenth of their lifetime has elapsed
            expires_at: assumed.expired_time - self.duration_seconds / 10 * 9,
        })
    }
}

#[async_trait]
impl Provider for RoleArnProvider {
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>> {
        let initial = self.fetch().await?;
        Ok(Arc::new(RoleArnCredential::new(self.clone(), initial, 0)))
    }
}
