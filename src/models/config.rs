use std::fmt;

/// Environment variable holding the bucket name.
pub const ENV_BUCKET: &str = "SPACES_BUCKET";
/// Environment variable holding the region code.
pub const ENV_REGION: &str = "SPACES_REGION";
/// Environment variable holding the access key id.
pub const ENV_ACCESS_KEY: &str = "DO_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "DO_SECRET_KEY";

const DEFAULT_BUCKET: &str = "700days";
const DEFAULT_REGION: &str = "ams3";

/// Fixed domain under which Spaces buckets are addressed.
pub const STORAGE_DOMAIN: &str = "digitaloceanspaces.com";

/// Application configuration loaded once at startup.
///
/// Immutable for the process lifetime. The secret key is deliberately kept
/// out of `Debug` output; only the last characters of the access key may be
/// shown to clients.
#[derive(Clone)]
pub struct AppConfig {
    /// Bucket holding the signable objects
    pub bucket: String,

    /// Region code the bucket lives in (e.g. "ams3")
    pub region: String,

    /// Access key id, echoed (masked) in health responses and signed URLs
    pub access_key: String,

    secret_key: String,
}

impl AppConfig {
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Bucket and region fall back to built-in defaults when unset or empty;
    /// the credential pair has no default. Returns `None` when credentials
    /// are missing, in which case the server still starts and answers every
    /// request with the misconfiguration error.
    pub fn from_env() -> Option<Self> {
        let bucket = env_non_empty(ENV_BUCKET).unwrap_or_else(|| DEFAULT_BUCKET.to_string());
        let region = env_non_empty(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let access_key = env_non_empty(ENV_ACCESS_KEY)?;
        let secret_key = env_non_empty(ENV_SECRET_KEY)?;

        Some(Self {
            bucket,
            region,
            access_key,
            secret_key,
        })
    }

    /// Hostname the signed URLs point at: `{bucket}.{region}.digitaloceanspaces.com`
    pub fn endpoint_host(&self) -> String {
        format!("{}.{}.{}", self.bucket, self.region, STORAGE_DOMAIN)
    }

    /// Last 4 characters of the access key, for masked health output.
    pub fn access_key_suffix(&self) -> String {
        let len = self.access_key.chars().count();
        self.access_key
            .chars()
            .skip(len.saturating_sub(4))
            .collect()
    }

    /// Secret key used for signing. Never log or echo this value.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field(
                "access_key",
                &format_args!("…{}", self.access_key_suffix()),
            )
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
