//! # tencentcloud-vpc
//!
//! A typed client for the Tencent Cloud Virtual Private Cloud API
//! (service `vpc`, version `2017-03-12`).
//!
//! The crate is split in two layers:
//!
//! - [`application::client::Client`] is the generic RPC client. It completes the
//!   common parameters of a request, signs it (TC3-HMAC-SHA256 by default),
//!   sends it through `reqwest` with optional retries, throttling and a region
//!   circuit breaker, and decodes the `{"Response": {...}}` envelope.
//! - [`vpc::VpcClient`] exposes one strongly typed method per VPC action
//!   (`create_vpc`, `describe_route_tables`, `create_routes`, ...).
//!
//! Credentials come from [`credential`]: static keys, environment variables,
//! the `~/.tencentcloud/credentials` profile file, the CVM instance role, or an
//! STS AssumeRole, optionally chained.
//!
//! # Example
//! ```ignore
//! use tencentcloud_vpc::prelude::*;
//!
//! let vpc = VpcClient::new_with_secret_id("AKID...", "secret", "ap-guangzhou");
//! let request = DescribeVpcsRequest {
//!     filters: Some(vec![Filter::new("vpc-name", ["default"])]),
//!     ..DescribeVpcsRequest::new()
//! };
//! let response = vpc.describe_vpcs(request).await?;
//! ```

/// Generic RPC client, configuration, signing, throttling and breaker
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Credential types and credential providers
pub mod credential;
/// Error types
pub mod error;
/// CVM instance metadata client
pub mod metadata;
/// Request, response, retry and transport models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Utility helpers
pub mod utils;
/// Typed VPC API
pub mod vpc;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
