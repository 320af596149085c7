use crate::constants::{CLIENT_ERROR_CREDENTIAL, ENV_SECRET_ID, ENV_SECRET_KEY};
use crate::credential::{Credential, CredentialSource, CvmRoleProvider, ProfileProvider};
use crate::error::{AppError, SdkError, TcResult};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;
use tracing::debug;

/// Discovers a credential
///
/// Providers report [`AppError::CredentialUnavailable`] when they have nothing
/// to offer, which lets a [`ProviderChain`] move on to the next one.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Returns the discovered credential
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>>;
}

/// Reads a credential from two environment variables
#[derive(Debug, Clone)]
pub struct EnvProvider {
    secret_id_env: String,
    secret_key_env: String,
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new(ENV_SECRET_ID, ENV_SECRET_KEY)
    }
}

impl EnvProvider {
    /// Provider reading the given variable names
    pub fn new(secret_id_env: impl Into<String>, secret_key_env: impl Into<String>) -> Self {
        Self {
            secret_id_env: secret_id_env.into(),
            secret_key_env: secret_key_env.into(),
        }
    }
}

#[async_trait]
impl Provider for EnvProvider {
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>> {
        let (Ok(secret_id), Ok(secret_key)) =
            (env::var(&self.secret_id_env), env::var(&self.secret_key_env))
        else {
            return Err(AppError::CredentialUnavailable(
                "could not find environmental variable".to_string(),
            ));
        };
        if secret_id.is_empty() || secret_key.is_empty() {
            return Err(SdkError::client(
                CLIENT_ERROR_CREDENTIAL,
                format!(
                    "Environmental variable ({} or {}) is empty",
                    self.secret_id_env, self.secret_key_env
                ),
            )
            .into());
        }
        Ok(Arc::new(Credential::new(secret_id, secret_key)))
    }
}

/// Tries providers in order and returns the first credential found
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderChain {
    /// Chain over `providers`
    #[must_use]
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Appends a provider
    #[must_use]
    pub fn with(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl Provider for ProviderChain {
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>> {
        for provider in &self.providers {
            match provider.get_credential().await {
                Ok(credential) => return Ok(credential),
                Err(AppError::CredentialUnavailable(reason)) => {
                    debug!("credential provider skipped: {}", reason);
                }
                Err(e) => return Err(e),
            }
        }
        Err(SdkError::client(
            CLIENT_ERROR_CREDENTIAL,
            "no credential found in every providers",
        )
        .into())
    }
}

/// Environment, then credentials file, then CVM instance role
#[must_use]
pub fn default_provider_chain() -> ProviderChain {
    ProviderChain::default()
        .with(EnvProvider::default())
        .with(ProfileProvider::default())
        .with(CvmRoleProvider::default())
}
