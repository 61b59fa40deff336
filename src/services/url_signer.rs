//! Signature V2 presigning for Spaces GET URLs.
//!
//! Spaces still accepts the legacy five-field query-string signing scheme
//! (`AWSAccessKeyId` / `Expires` / `Signature`). The string-to-sign layout
//! and the two empty fields in it are part of the wire contract; the storage
//! backend rejects the URL if they drift.

use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use sha1::Sha1;
use utoipa::ToSchema;

use crate::models::AppConfig;

type HmacSha1 = Hmac<Sha1>;

/// Shortest lifetime a signed URL may have, in seconds.
pub const MIN_TTL_SECS: i64 = 60;
/// Longest lifetime a signed URL may have, in seconds (24h).
pub const MAX_TTL_SECS: i64 = 86_400;
/// Lifetime used when the client does not ask for one (30min).
pub const DEFAULT_TTL_SECS: i64 = 1_800;

/// Characters escaped the way `encodeURIComponent` escapes them: everything
/// except alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A presigned GET URL with its expiry metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignedUrl {
    /// The full presigned URL
    pub url: String,
    /// Seconds until the URL expires
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
    /// Absolute expiry instant, ISO-8601
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
    /// The normalized key the URL grants access to
    pub key: String,
}

/// URL signing service for time-limited object access.
///
/// Pure given its inputs: the clock is injected per call, so a fixed instant
/// yields a byte-identical signature every time.
pub struct UrlSigner {
    bucket: String,
    endpoint_host: String,
    access_key: String,
    secret: Vec<u8>,
}

impl UrlSigner {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bucket: config.bucket.clone(),
            endpoint_host: config.endpoint_host(),
            access_key: config.access_key.clone(),
            secret: config.secret_key().as_bytes().to_vec(),
        }
    }

    /// Presign a GET for `clean_key`, valid for `ttl_secs` (clamped to
    /// `[MIN_TTL_SECS, MAX_TTL_SECS]`, `DEFAULT_TTL_SECS` when absent).
    ///
    /// The key must already have passed [`validate_key`]; no checking
    /// happens here.
    ///
    /// [`validate_key`]: crate::services::key_validator::validate_key
    pub fn presign_get(
        &self,
        clean_key: &str,
        ttl_secs: Option<i64>,
        now: DateTime<Utc>,
    ) -> SignedUrl {
        let ttl = ttl_secs
            .unwrap_or(DEFAULT_TTL_SECS)
            .clamp(MIN_TTL_SECS, MAX_TTL_SECS);

        // Computed once, used for both the signature and the reported
        // expiry. Recomputing it after signing could let the metadata drift
        // from what was actually signed.
        let expires = now.timestamp() + ttl;

        // The signature covers the raw resource path, not the URL-encoded
        // form the final URL carries.
        let string_to_sign = format!("GET\n\n\n{expires}\n/{}/{clean_key}", self.bucket);

        let mut mac =
            HmacSha1::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(string_to_sign.as_bytes());
        let signature =
            base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes());

        // Encode each path segment on its own so the `/` separators survive
        // while reserved characters like `#`, `?` and spaces are escaped.
        let encoded_path = clean_key
            .split('/')
            .map(|segment| utf8_percent_encode(segment, COMPONENT).to_string())
            .collect::<Vec<_>>()
            .join("/");

        let url = format!(
            "https://{}/{}?AWSAccessKeyId={}&Expires={}&Signature={}",
            self.endpoint_host,
            encoded_path,
            utf8_percent_encode(&self.access_key, COMPONENT),
            expires,
            utf8_percent_encode(&signature, COMPONENT),
        );

        let expires_at = DateTime::<Utc>::from_timestamp(expires, 0)
            .expect("expiry fits in chrono's range")
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        SignedUrl {
            url,
            expires_in: ttl,
            expires_at,
            key: clean_key.to_string(),
        }
    }
}
