//
//  onesky-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The platform API authenticates each request with three query parameters:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `api_key` | The public API key |
//! | `timestamp` | Current Unix time in seconds, as a decimal string |
//! | `dev_hash` | Lowercase hex MD5 of `timestamp` bytes followed by the API secret bytes |
//!
//! The server rejects timestamps outside its signing window, so a token is built
//! fresh for every request and never reused.
//!
//! ## Example
//!
//! ```rust
//! use onesky_cli::auth::{dev_hash, AuthToken};
//!
//! let token = AuthToken::at("my-key", "my-secret", 1_700_000_000);
//! assert_eq!(token.timestamp, "1700000000");
//! assert_eq!(token.dev_hash, dev_hash("1700000000", "my-secret"));
//! ```

use md5::{Digest, Md5};

use crate::api::common::Params;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Query parameter carrying the signing timestamp.
pub const TIMESTAMP_PARAM: &str = "timestamp";

/// Query parameter carrying the request digest.
pub const DEV_HASH_PARAM: &str = "dev_hash";

/// The authentication triple attached to every request.
///
/// # Example
///
/// ```rust
/// use onesky_cli::auth::AuthToken;
/// use onesky_cli::Params;
///
/// let mut params = Params::new().with("api_key", "spoofed");
/// AuthToken::generate("real-key", "secret").apply_to_params(&mut params);
///
/// assert_eq!(params.get("api_key"), Some("real-key"));
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// The public API key.
    pub api_key: String,
    /// Unix time in seconds as a decimal string.
    pub timestamp: String,
    /// Hex MD5 digest of `timestamp ++ api_secret`.
    pub dev_hash: String,
}

impl AuthToken {
    /// Builds a token signed with the current time.
    pub fn generate(api_key: &str, api_secret: &str) -> Self {
        Self::at(api_key, api_secret, chrono::Utc::now().timestamp())
    }

    /// Builds a token for a fixed Unix timestamp.
    pub fn at(api_key: &str, api_secret: &str, timestamp: i64) -> Self {
        let timestamp = timestamp.to_string();
        let dev_hash = dev_hash(&timestamp, api_secret);
        Self {
            api_key: api_key.to_string(),
            timestamp,
            dev_hash,
        }
    }

    /// Writes the three authentication fields into `params`.
    ///
    /// Existing entries with the same names are replaced, so callers can never
    /// override the signature.
    pub fn apply_to_params(&self, params: &mut Params) {
        params.extend(self.to_params());
    }

    /// Returns the three authentication fields as their own mapping.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with(API_KEY_PARAM, &self.api_key)
            .with(TIMESTAMP_PARAM, &self.timestamp)
            .with(DEV_HASH_PARAM, &self.dev_hash)
    }
}

/// Computes the request digest: hex MD5 over the timestamp bytes followed by the
/// secret bytes, with no delimiter.
pub fn dev_hash(timestamp: &str, api_secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn test_dev_hash_known_vectors() {
        assert_eq!(
            dev_hash("1700000000", SECRET),
            "f28d20ce4d36f025f30d23d76c0f5f27"
        );
        assert_eq!(
            dev_hash("1234567890", "secret"),
            "e9b7ae6c91f6694cfc36d893733b1f7c"
        );
    }

    #[test]
    fn test_dev_hash_matches_single_digest_of_concatenation() {
        let joined = Md5::digest(b"1700000000secret");
        assert_eq!(dev_hash("1700000000", "secret"), hex::encode(joined));
    }

    #[test]
    fn test_token_at_fixed_timestamp() {
        let token = AuthToken::at("key", SECRET, 1_700_000_000);
        assert_eq!(token.api_key, "key");
        assert_eq!(token.timestamp, "1700000000");
        assert_eq!(token.dev_hash, "f28d20ce4d36f025f30d23d76c0f5f27");
    }

    #[test]
    fn test_generate_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let token = AuthToken::generate("key", SECRET);
        let after = chrono::Utc::now().timestamp();

        let ts: i64 = token.timestamp.parse().unwrap();
        assert!(ts >= before && ts <= after);
        assert_eq!(token.dev_hash, dev_hash(&token.timestamp, SECRET));
    }

    #[test]
    fn test_auth_fields_win_over_caller_params() {
        let mut params = Params::new()
            .with(TIMESTAMP_PARAM, "0")
            .with(DEV_HASH_PARAM, "forged")
            .with("page", 1);
        let token = AuthToken::at("key", SECRET, 1_700_000_000);
        token.apply_to_params(&mut params);

        assert_eq!(params.len(), 4);
        assert_eq!(params.get(TIMESTAMP_PARAM), Some("1700000000"));
        assert_eq!(params.get(DEV_HASH_PARAM), Some(token.dev_hash.as_str()));
        assert_eq!(params.get("page"), Some("1"));
    }
}
