use crate::constants::DEFAULT_SESSION_NAME_PREFIX;
use chrono::Utc;
use rand::Rng;

/// Generates a random idempotency token
///
/// The token is 16 random bytes rendered as upper-case hex in the
/// `8-4-4-4-12` layout, e.g. `3F2504E0-4F89-11D3-9A0C-0305E82C3301`.
///
/// # Examples
/// ```
/// use tencentcloud_vpc::utils::id::random_client_token;
/// let token = random_client_token();
/// assert_eq!(token.len(), 36);
/// ```
#[must_use]
pub fn random_client_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    let hex = hex::encode_upper(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Generates the value of the `Nonce` common parameter
#[must_use]
pub fn random_nonce() -> u32 {
    rand::rng().random_range(1..u32::MAX)
}

/// Default AssumeRole session name: a fixed prefix plus the current time in microseconds
#[must_use]
pub fn default_role_session_name() -> String {
    format!(
        "{}{}",
        DEFAULT_SESSION_NAME_PREFIX,
        Utc::now().timestamp_micros()
    )
}
