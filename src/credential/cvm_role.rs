use crate::constants::{CLIENT_ERROR_CREDENTIAL, CVM_ROLE_EXPIRY_MARGIN_SECS};
use crate::credential::{
    Credential, CredentialSource, Provider, Refresh, RefreshingCredential, TemporaryCredential,
};
use crate::error::{AppError, SdkError, TcResult};
use crate::metadata::MetadataClient;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const ROLE_PATH: &str = "cam/security-credentials/";

/// Temporary credential of the CAM role bound to the instance
pub type CvmRoleCredential = RefreshingCredential<CvmRoleProvider>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RoleResponse {
    #[serde(default)]
    tmp_secret_id: String,
    #[serde(default)]
    tmp_secret_key: String,
    #[serde(default)]
    expired_time: i64,
    #[serde(default)]
    token: String,
    #[serde(default)]
    code: String,
}

/// Fetches the credential of the CAM role bound to the running CVM
///
/// The role name is discovered from the metadata service unless given.
#[derive(Debug, Clone, Default)]
pub struct CvmRoleProvider {
    role_name: Option<String>,
    metadata: MetadataClient,
}

impl CvmRoleProvider {
    /// Provider for a known role name
    pub fn new(role_name: impl Into<String>) -> Self {
        let role_name: String = role_name.into();
        Self {
            role_name: (!role_name.is_empty()).then_some(role_name),
            metadata: MetadataClient::default(),
        }
    }

    /// Replaces the metadata client
    #[must_use]
    pub fn with_metadata(mut self, metadata: MetadataClient) -> Self {
        self.metadata = metadata;
        self
    }

    async fn role_name(&self) -> TcResult<String> {
        if let Some(name) = &self.role_name {
            return Ok(name.clone());
        }
        match self.metadata.get_optional(ROLE_PATH).await {
            Ok(Some(name)) if !name.is_empty() => Ok(name),
            _ => Err(AppError::CredentialUnavailable(
                "get cvm role name failed, Please confirm whether the role is bound".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Refresh for CvmRoleProvider {
    async fn fetch(&self) -> TcResult<TemporaryCredential> {
        let role_name = self.role_name().await?;
        let body = self
            .metadata
            .get_optional(&format!("{ROLE_PATH}{role_name}"))
            .await?
            .ok_or_else(|| {
                SdkError::client(
                    CLIENT_ERROR_CREDENTIAL,
                    "get cvm role name failed, Please confirm whether the role is bound",
                )
            })?;
        let role: RoleResponse = serde_json::from_str(&body)
            .map_err(|e| SdkError::client(CLIENT_ERROR_CREDENTIAL, e.to_string()))?;
        if role.code != "Success" {
            return Err(SdkError::client(
                CLIENT_ERROR_CREDENTIAL,
                format!(
                    "Get credential from metadata server by role name {} failed, code={}",
                    role_name, role.code
                ),
            )
            .into());
        }
        Ok(TemporaryCredential {
            credential: Credential::with_token(role.tmp_secret_id, role.tmp_secret_key, role.token),
            expires_at: role.expired_time,
        })
    }
}

#[async_trait]
impl Provider for CvmRoleProvider {
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>> {
        let initial = self.fetch().await?;
        Ok(Arc::new(CvmRoleCredential::new(
            self.clone(),
            initial,
            CVM_ROLE_EXPIRY_MARGIN_SECS,
        )))
    }
}
