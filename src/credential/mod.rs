//! Credentials and the providers that discover them
//!
//! A [`CredentialSource`] yields the keys used to sign one request. Static
//! [`Credential`]s resolve to themselves; temporary credentials obtained from
//! the CVM role or STS are cached in a [`RefreshingCredential`] and fetched
//! again shortly before they expire.

/// CVM instance role provider
pub mod cvm_role;
/// INI credentials file provider
pub mod profile;
/// Provider trait, environment provider and provider chain
pub mod provider;
/// STS AssumeRole provider
pub mod role_arn;

pub use cvm_role::{CvmRoleCredential, CvmRoleProvider};
pub use profile::{IniFile, ProfileProvider};
pub use provider::{EnvProvider, Provider, ProviderChain, default_provider_chain};
pub use role_arn::{RoleArnCredential, RoleArnProvider};

use crate::error::TcResult;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Secret id, secret key and optional session token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Secret id, `AKID...`
    pub secret_id: String,
    /// Secret key
    pub secret_key: String,
    /// Session token of temporary credentials
    pub token: Option<String>,
}

impl Credential {
    /// Long term credential
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: None,
        }
    }

    /// Temporary credential with a session token
    pub fn with_token(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let token: String = token.into();
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// Session token, empty when absent
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"********")
            .field("token", &self.token.as_ref().map(|_| "********"))
            .finish()
    }
}

/// Anything that can produce signing keys
#[async_trait]
pub trait CredentialSource: Send + Sync + fmt::Debug {
    /// Returns the keys to sign the next request with
    async fn resolve(&self) -> TcResult<Credential>;
}

#[async_trait]
impl CredentialSource for Credential {
    async fn resolve(&self) -> TcResult<Credential> {
        Ok(self.clone())
    }
}

/// Temporary keys with their effective expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryCredential {
    /// Keys
    pub credential: Credential,
    /// Unix time after which the keys must not be used
    pub expires_at: i64,
}

/// A source of temporary keys
#[async_trait]
pub trait Refresh: Send + Sync + fmt::Debug {
    /// Fetches a fresh set of keys
    async fn fetch(&self) -> TcResult<TemporaryCredential>;
}

/// Caches temporary keys and refreshes them before they expire
///
/// Keys are considered stale once `expires_at - margin <= now`, or when any
/// of id, key or token is empty. A failed refresh keeps serving the stale keys
/// and logs the error.
#[derive(Debug)]
pub struct RefreshingCredential<R: Refresh> {
    source: R,
    margin_secs: i64,
    cache: RwLock<TemporaryCredential>,
}

impl<R: Refresh> RefreshingCredential<R> {
    /// Wraps keys already fetched from `source`
    pub fn new(source: R, initial: TemporaryCredential, margin_secs: i64) -> Self {
        Self {
            source,
            margin_secs,
            cache: RwLock::new(initial),
        }
    }

    /// Source used on refresh
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Effective expiry of the cached keys
    pub async fn expires_at(&self) -> i64 {
        self.cache.read().await.expires_at
    }

    fn needs_refresh(&self, cached: &TemporaryCredential, now: i64) -> bool {
        let c = &cached.credential;
        c.secret_id.is_empty()
            || c.secret_key.is_empty()
            || c.token().is_empty()
            || cached.expires_at - self.margin_secs <= now
    }
}

#[async_trait]
impl<R: Refresh> CredentialSource for RefreshingCredential<R> {
    async fn resolve(&self) -> TcResult<Credential> {
        {
            let cached = self.cache.read().await;
            if !self.needs_refresh(&cached, Utc::now().timestamp()) {
                return Ok(cached.credential.clone());
            }
        }

        let mut cached = self.cache.write().await;
        if !self.needs_refresh(&cached, Utc::now().timestamp()) {
            return Ok(cached.credential.clone());
        }
        match self.source.fetch().await {
            Ok(fresh) => {
                debug!("temporary credential refreshed, expires at {}", fresh.expires_at);
                *cached = fresh;
            }
            Err(e) => error!("failed to refresh temporary credential: {}", e),
        }
        Ok(cached.credential.clone())
    }
}
