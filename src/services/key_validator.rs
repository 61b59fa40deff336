//! Key validation for presign requests.
//!
//! This is the sole authorization boundary of the service: only keys inside
//! one logical directory of the bucket may ever be signed, so the endpoint
//! cannot be used as a bucket-wide credential oracle.

use thiserror::Error;

/// Prefix every signable object key must carry.
pub const KEY_PREFIX: &str = "uploads-shd/";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    #[error("Missing 'key'")]
    MissingKey,

    #[error("Invalid key prefix")]
    InvalidPrefix,

    #[error("Invalid key")]
    PathTraversal,
}

/// Validate a raw, untrusted object key and return its normalized form.
///
/// Leading slashes are stripped (normalization, not rejection); everything
/// else is a hard gate. No further normalization happens on purpose: the
/// signed resource path must stay byte-identical to what the storage
/// backend expects, so repeated slashes and case are preserved.
pub fn validate_key(raw: &str) -> Result<String, KeyError> {
    if raw.is_empty() {
        return Err(KeyError::MissingKey);
    }

    let clean = raw.trim_start_matches('/');

    if !clean.starts_with(KEY_PREFIX) {
        return Err(KeyError::InvalidPrefix);
    }

    // Object keys are not filesystem paths, but a downstream component might
    // interpret them positionally. Reject traversal sequences outright.
    if clean.contains("..") {
        return Err(KeyError::PathTraversal);
    }

    Ok(clean.to_string())
}
