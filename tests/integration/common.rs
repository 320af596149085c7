// Common utilities for integration tests

use tencentcloud_vpc::prelude::*;
use tokio::runtime::Runtime;
use tracing::info;

/// Creates a VPC client from the environment configuration and credentials
pub fn create_test_client() -> VpcClient {
    setup_logger();
    let config = Config::new();
    info!("Using region {}", config.region);

    let rt = Runtime::new().expect("Failed to create runtime");
    let credential = rt
        .block_on(EnvProvider::default().get_credential())
        .expect("TENCENTCLOUD_SECRET_ID and TENCENTCLOUD_SECRET_KEY must be set");

    VpcClient::from_client(
        Client::init(config.region)
            .with_profile(config.profile)
            .with_credential_source(credential),
    )
}

/// Vpc id the route tests work on, read from `TENCENTCLOUD_TEST_VPC_ID`
pub fn test_vpc_id() -> Option<String> {
    std::env::var("TENCENTCLOUD_TEST_VPC_ID")
        .ok()
        .filter(|id| !id.is_empty())
}
