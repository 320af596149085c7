/// Service name of the VPC product
pub const VPC_SERVICE: &str = "vpc";
/// API version of the VPC product wrapped by this crate
pub const VPC_API_VERSION: &str = "2017-03-12";

/// Root domain every service endpoint hangs from
pub const DEFAULT_ROOT_DOMAIN: &str = "tencentcloudapi.com";
/// Scheme used when the HTTP profile does not set one
pub const DEFAULT_SCHEME: &str = "https";
/// HTTP method used when the HTTP profile does not set one
pub const DEFAULT_REQ_METHOD: &str = "POST";
/// Request timeout in seconds
pub const DEFAULT_REQ_TIMEOUT_SECS: u64 = 60;
/// Default region used by [`crate::application::config::Config`]
pub const DEFAULT_REGION: &str = "ap-guangzhou";

/// Value of the `RequestClient` common parameter
pub const REQUEST_CLIENT: &str = concat!("SDK_RUST_", env!("CARGO_PKG_VERSION"));
/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = concat!("tencentcloud-vpc/", env!("CARGO_PKG_VERSION"));

/// Endpoint the region breaker falls back to while open
pub const DEFAULT_BACKUP_ENDPOINT: &str = "ap-guangzhou.tencentcloudapi.com";

/// Remote error code signalling the caller is being throttled
pub const CODE_LIMIT_EXCEEDED: &str = "RequestLimitExceeded";
/// Remote error code for server side failures
pub const CODE_INTERNAL_ERROR: &str = "InternalError";

/// Generic client side error code
pub const CLIENT_ERROR: &str = "ClientError";
/// Client side code for credential resolution failures
pub const CLIENT_ERROR_CREDENTIAL: &str = "ClientError.CredentialError";
/// Client side code for transport failures
pub const CLIENT_ERROR_NETWORK: &str = "ClientError.NetworkError";
/// Client side code for region breaker failures
pub const CLIENT_ERROR_CIRCUIT_BREAKER: &str = "ClientError.CircuitBreakerError";
/// Client side code for undecodable JSON payloads
pub const CLIENT_ERROR_PARSE_JSON: &str = "ClientError.ParseJsonError";
/// Client side code for invalid request parameters
pub const CLIENT_ERROR_INVALID_PARAMETER: &str = "ClientError.InvalidParameter";
/// Client side code for malformed credential files
pub const CLIENT_ERROR_INI: &str = "ClientError.INIError";

/// Base URL of the CVM instance metadata service
pub const METADATA_BASE_URL: &str = "http://metadata.tencentyun.com/latest/meta-data/";

/// Environment variable holding the secret id
pub const ENV_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
/// Environment variable holding the secret key
pub const ENV_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
/// Environment variable overriding the credentials file location
pub const ENV_CREDENTIALS_FILE: &str = "TENCENTCLOUD_CREDENTIALS_FILE";

/// CVM role credentials are refreshed this many seconds before they expire
pub const CVM_ROLE_EXPIRY_MARGIN_SECS: i64 = 300;

/// STS endpoint used by the AssumeRole provider
pub const STS_ENDPOINT: &str = "sts.tencentcloudapi.com";
/// STS service name
pub const STS_SERVICE: &str = "sts";
/// STS API version
pub const STS_API_VERSION: &str = "2018-08-13";
/// Region STS calls are sent to
pub const STS_REGION: &str = "ap-guangzhou";
/// Default lifetime of assumed role credentials in seconds
pub const STS_DEFAULT_DURATION_SECS: i64 = 7200;
/// Longest lifetime STS accepts in seconds
pub const STS_MAX_DURATION_SECS: i64 = 43200;
/// Prefix of generated role session names
pub const DEFAULT_SESSION_NAME_PREFIX: &str = "tencentcloud-rust-sdk-";
