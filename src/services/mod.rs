pub mod key_validator;
pub mod url_signer;

pub use key_validator::{validate_key, KeyError};
pub use url_signer::{SignedUrl, UrlSigner};
