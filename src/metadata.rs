//! Client for the CVM instance metadata service
//!
//! Every CVM can read facts about itself (region, network interfaces, bound
//! CAM role) from `http://metadata.tencentyun.com/latest/meta-data/`.

use crate::constants::{METADATA_BASE_URL, USER_AGENT};
use crate::error::{AppError, TcResult};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error};

/// Timeout of one metadata lookup
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads the instance metadata service
#[derive(Debug, Clone)]
pub struct MetadataClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new(METADATA_BASE_URL)
    }
}

impl MetadataClient {
    /// Client reading below `base_url`; a trailing slash is added when missing
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(METADATA_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build metadata HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            base_url,
            http_client,
        }
    }

    /// Base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads `path`; `None` when the service answers 404
    pub async fn get_optional(&self, path: &str) -> TcResult<Option<String>> {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Metadata(format!("get {path} failed: {e}")))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Metadata(format!("read {path} failed: {e}")))?;
        if status != StatusCode::OK {
            return Err(AppError::Metadata(format!(
                "get {path} failed with status {status}: {body}"
            )));
        }
        Ok(Some(body.trim().to_string()))
    }

    /// Reads `path`, failing when it does not exist
    pub async fn get(&self, path: &str) -> TcResult<String> {
        self.get_optional(path)
            .await?
            .ok_or_else(|| AppError::Metadata(format!("get {path} failed with status 404")))
    }

    /// Region of the instance, e.g. `ap-guangzhou`
    pub async fn region(&self) -> TcResult<String> {
        self.get("placement/region").await
    }

    /// Zone of the instance, e.g. `ap-guangzhou-3`
    pub async fn zone(&self) -> TcResult<String> {
        self.get("placement/zone").await
    }

    /// Instance id
    pub async fn instance_id(&self) -> TcResult<String> {
        self.get("instance-id").await
    }

    /// MAC address of the primary network interface
    pub async fn mac(&self) -> TcResult<String> {
        self.get("mac").await
    }

    /// VPC the primary network interface belongs to
    pub async fn vpc_id(&self) -> TcResult<String> {
        let mac = self.mac().await?;
        self.get(&format!("network/interfaces/macs/{mac}/vpc-id"))
            .await
    }

    /// Subnet the primary network interface belongs to
    pub async fn subnet_id(&self) -> TcResult<String> {
        let mac = self.mac().await?;
        self.get(&format!("network/interfaces/macs/{mac}/subnet-id"))
            .await
    }
}
