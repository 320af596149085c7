/// Region circuit breaker
pub mod circuit_breaker;
/// Generic RPC client
pub mod client;
/// Application configuration module
pub mod config;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Request signing
pub mod signer;
