/// HTTP transport with throttling and retries
pub mod http;
/// Request plumbing shared by every action
pub mod request;
/// Response envelope decoding
pub mod response;
/// Retry configuration
pub mod retry;
