use async_trait::async_trait;
use chrono::Utc;
use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tencentcloud_vpc::credential::{
    Credential, CredentialSource, EnvProvider, Provider, ProviderChain, Refresh,
    RefreshingCredential, TemporaryCredential,
};
use tencentcloud_vpc::error::{AppError, SdkError, TcResult};
use tokio_test::block_on;

#[test]
fn test_static_credential_resolves_to_itself() {
    let credential = Credential::new("AKIDstatic", "secret");
    let resolved = block_on(credential.resolve()).unwrap();
    assert_eq!(resolved, credential);
    assert_eq!(resolved.token(), "");
}

#[test]
fn test_credential_debug_masks_secrets() {
    let credential = Credential::with_token("AKIDdebug", "very-secret", "tok");
    let debug = format!("{:?}", credential);
    assert!(debug.contains("AKIDdebug"));
    assert!(!debug.contains("very-secret"));
    assert!(!debug.contains("tok\""));
}

#[test]
fn test_with_token_drops_empty_token() {
    assert_eq!(Credential::with_token("a", "b", "").token, None);
    assert_eq!(Credential::with_token("a", "b", "t").token(), "t");
}

#[tokio::test]
async fn test_env_provider_reads_variables() {
    unsafe {
        env::set_var("TCVPC_TEST_ENV_ID", "AKIDenv");
        env::set_var("TCVPC_TEST_ENV_KEY", "envsecret");
    }
    let provider = EnvProvider::new("TCVPC_TEST_ENV_ID", "TCVPC_TEST_ENV_KEY");
    let credential = provider.get_credential().await.unwrap().resolve().await.unwrap();
    unsafe {
        env::remove_var("TCVPC_TEST_ENV_ID");
        env::remove_var("TCVPC_TEST_ENV_KEY");
    }
    assert_eq!(credential.secret_id, "AKIDenv");
    assert_eq!(credential.secret_key, "envsecret");
}

#[tokio::test]
async fn test_env_provider_unset_is_unavailable() {
    let provider = EnvProvider::new("TCVPC_TEST_UNSET_ID", "TCVPC_TEST_UNSET_KEY");
    let err = provider.get_credential().await.unwrap_err();
    assert!(matches!(err, AppError::CredentialUnavailable(_)));
}

#[tokio::test]
async fn test_env_provider_empty_is_error() {
    unsafe {
        env::set_var("TCVPC_TEST_EMPTY_ID", "");
        env::set_var("TCVPC_TEST_EMPTY_KEY", "x");
    }
    let provider = EnvProvider::new("TCVPC_TEST_EMPTY_ID", "TCVPC_TEST_EMPTY_KEY");
    let err = provider.get_credential().await.unwrap_err();
    unsafe {
        env::remove_var("TCVPC_TEST_EMPTY_ID");
        env::remove_var("TCVPC_TEST_EMPTY_KEY");
    }
    assert_eq!(err.sdk_code(), Some("ClientError.CredentialError"));
}

#[tokio::test]
async fn test_chain_skips_unavailable_providers() {
    unsafe {
        env::set_var("TCVPC_TEST_CHAIN_ID", "AKIDchain");
        env::set_var("TCVPC_TEST_CHAIN_KEY", "chainsecret");
    }
    let chain = ProviderChain::default()
        .with(EnvProvider::new("TCVPC_TEST_CHAIN_MISSING_ID", "TCVPC_TEST_CHAIN_MISSING_KEY"))
        .with(EnvProvider::new("TCVPC_TEST_CHAIN_ID", "TCVPC_TEST_CHAIN_KEY"));
    let credential = chain.get_credential().await.unwrap().resolve().await.unwrap();
    unsafe {
        env::remove_var("TCVPC_TEST_CHAIN_ID");
        env::remove_var("TCVPC_TEST_CHAIN_KEY");
    }
    assert_eq!(chain.len(), 2);
    assert_eq!(credential.secret_id, "AKIDchain");
}

#[tokio::test]
async fn test_chain_without_credential_fails() {
    let chain = ProviderChain::default().with(EnvProvider::new(
        "TCVPC_TEST_NONE_ID",
        "TCVPC_TEST_NONE_KEY",
    ));
    let err = chain.get_credential().await.unwrap_err();
    assert_eq!(err.sdk_code(), Some("ClientError.CredentialError"));
    assert!(err.to_string().contains("no credential found in every providers"));

    assert!(ProviderChain::default().is_empty());
}

#[derive(Debug, Default)]
struct CountingSource {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Refresh for CountingSource {
    async fn fetch(&self) -> TcResult<TemporaryCredential> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(SdkError::client("ClientError.CredentialError", "sts down").into());
        }
        Ok(TemporaryCredential {
            credential: Credential::with_token(format!("id-{n}"), "key", "token"),
            expires_at: Utc::now().timestamp() + 3600,
        })
    }
}

fn temporary(id: &str, expires_in: i64) -> TemporaryCredential {
    TemporaryCredential {
        credential: Credential::with_token(id, "key", "token"),
        expires_at: Utc::now().timestamp() + expires_in,
    }
}

#[tokio::test]
async fn test_fresh_credential_is_served_from_cache() {
    let cached = RefreshingCredential::new(CountingSource::default(), temporary("id-0", 3600), 300);
    assert_eq!(cached.resolve().await.unwrap().secret_id, "id-0");
    assert_eq!(cached.source().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_credential_inside_margin_is_refreshed() {
    let cached = RefreshingCredential::new(CountingSource::default(), temporary("id-0", 200), 300);
    assert_eq!(cached.resolve().await.unwrap().secret_id, "id-1");
    assert_eq!(cached.resolve().await.unwrap().secret_id, "id-1");
    assert_eq!(cached.source().calls.load(Ordering::SeqCst), 1);
    assert!(cached.expires_at().await > Utc::now().timestamp() + 3000);
}

#[tokio::test]
async fn test_failed_refresh_keeps_stale_keys() {
    let source = CountingSource {
        fail: true,
        ..CountingSource::default()
    };
    let cached = RefreshingCredential::new(source, temporary("id-stale", -10), 0);
    let credential = cached.resolve().await.unwrap();
    assert_eq!(credential.secret_id, "id-stale");
    assert_eq!(cached.source().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_provider_credential_is_shareable() {
    let source: Arc<dyn CredentialSource> = Arc::new(Credential::new("AKIDarc", "s"));
    let cloned = Arc::clone(&source);
    assert_eq!(cloned.resolve().await.unwrap().secret_id, "AKIDarc");
}
