//! Request signing
//!
//! Two families are supported: signature v3 (`TC3-HMAC-SHA256`), which signs a
//! canonical form of the HTTP request with a date and service scoped key, and
//! the legacy v1 signature (`HmacSHA1` / `HmacSHA256`), which signs the sorted
//! flattened parameters.

use crate::application::config::SignMethod;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::DateTime;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// Name of the v3 algorithm
pub const TC3_ALGORITHM: &str = "TC3-HMAC-SHA256";
/// Headers covered by a v3 signature
pub const TC3_SIGNED_HEADERS: &str = "content-type;host";
/// Payload marker signed instead of the body when unsigned payloads are requested
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Compute SHA256 hash and return as lowercase hex string
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute HMAC-SHA256
#[must_use]
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        unreachable!("HMAC accepts keys of any length")
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Compute HMAC-SHA1
#[must_use]
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let Ok(mut mac) = HmacSha1::new_from_slice(key) else {
        unreachable!("HMAC accepts keys of any length")
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Inputs of a v3 signature
#[derive(Debug, Clone)]
pub struct Tc3Input<'a> {
    /// `POST` or `GET`
    pub method: &'a str,
    /// Canonical query string, empty for POST
    pub canonical_query: &'a str,
    /// Value of the `Content-Type` header
    pub content_type: &'a str,
    /// Value of the `Host` header
    pub host: &'a str,
    /// Hex SHA-256 of the payload, or of `UNSIGNED-PAYLOAD`
    pub hashed_payload: &'a str,
    /// Service name, e.g. `vpc`
    pub service: &'a str,
    /// Unix timestamp in seconds, the same value sent in `X-TC-Timestamp`
    pub timestamp: i64,
}

impl Tc3Input<'_> {
    /// UTC date of the timestamp, `YYYY-MM-DD`
    #[must_use]
    pub fn date(&self) -> String {
        DateTime::from_timestamp(self.timestamp, 0)
            .unwrap_or_default()
            .format("%Y-%m-%d")
            .to_string()
    }

    /// `<date>/<service>/tc3_request`
    #[must_use]
    pub fn credential_scope(&self) -> String {
        format!("{}/{}/tc3_request", self.date(), self.service)
    }

    /// Canonical request
    #[must_use]
    pub fn canonical_request(&self) -> String {
        format!(
            "{}\n/\n{}\ncontent-type:{}\nhost:{}\n\n{}\n{}",
            self.method,
            self.canonical_query,
            self.content_type,
            self.host,
            TC3_SIGNED_HEADERS,
            self.hashed_payload
        )
    }

    /// String to sign
    #[must_use]
    pub fn string_to_sign(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            TC3_ALGORITHM,
            self.timestamp,
            self.credential_scope(),
            sha256_hex(self.canonical_request().as_bytes())
        )
    }

    /// Hex signature for `secret_key`
    #[must_use]
    pub fn signature(&self, secret_key: &str) -> String {
        let secret_date = hmac_sha256(
            format!("TC3{secret_key}").as_bytes(),
            self.date().as_bytes(),
        );
        let secret_service = hmac_sha256(&secret_date, self.service.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
        hex::encode(hmac_sha256(
            &secret_signing,
            self.string_to_sign().as_bytes(),
        ))
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization(&self, secret_id: &str, secret_key: &str) -> String {
        format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            TC3_ALGORITHM,
            secret_id,
            self.credential_scope(),
            TC3_SIGNED_HEADERS,
            self.signature(secret_key)
        )
    }
}

/// Encodes parameters as a sorted, percent encoded query string
#[must_use]
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// String signed by the v1 algorithms: `<METHOD><domain><path>?<k=v&...>`
///
/// Values are not encoded; keys are sorted.
#[must_use]
pub fn v1_string_to_sign(
    method: &str,
    domain: &str,
    path: &str,
    params: &BTreeMap<String, String>,
) -> String {
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{method}{domain}{path}?{query}")
}

/// Base64 v1 signature of `string_to_sign`
///
/// Anything but `HmacSHA256` signs with SHA1.
#[must_use]
pub fn sign_v1(string_to_sign: &str, secret_key: &str, method: SignMethod) -> String {
    let digest = match method {
        SignMethod::HmacSha256 => hmac_sha256(secret_key.as_bytes(), string_to_sign.as_bytes()),
        _ => hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes()),
    };
    STANDARD.encode(digest)
}
