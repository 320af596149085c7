//! # Prelude
//!
//! Commonly used types of the crate in one import.
//!
//! ## Usage
//!
//! ```rust
//! use tencentcloud_vpc::prelude::*;
//!
//! let vpc = VpcClient::new_with_secret_id("AKID", "secret", "ap-guangzhou");
//! let request = DescribeRouteTablesRequest {
//!     filters: Some(vec![Filter::new("vpc-id", ["vpc-2wdhuyfj"])]),
//!     ..DescribeRouteTablesRequest::new()
//! };
//! assert_eq!(request.base().action(), "DescribeRouteTables");
//! # let _ = vpc;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{
    ClientProfile, Config, HttpProfile, Language, RateLimiterConfig, SignMethod,
};

/// Retry policy
pub use crate::model::retry::{RetryConfig, RetryDuration};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{AppError, SdkError, TcResult};

// ============================================================================
// CLIENTS
// ============================================================================

/// Generic RPC client
pub use crate::application::client::{
    Client, new_client_with_providers, new_client_with_secret_id,
};

/// Typed VPC client
pub use crate::vpc::VpcClient;

/// Route synchronisation
pub use crate::vpc::route_sync::{RouteOutcome, RouteSync};

/// Instance metadata
pub use crate::metadata::MetadataClient;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Request plumbing
pub use crate::model::request::{ApiRequest, CommonRequest, RequestContext};

/// Generic response
pub use crate::model::response::CommonResponse;

/// VPC value types
pub use crate::vpc::models::*;

/// VPC requests
pub use crate::vpc::requests::*;

/// VPC responses
pub use crate::vpc::responses::*;

// ============================================================================
// CREDENTIALS
// ============================================================================

/// Credentials and providers
pub use crate::credential::{
    Credential, CredentialSource, CvmRoleProvider, EnvProvider, ProfileProvider, Provider,
    ProviderChain, RoleArnProvider, default_provider_chain,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
