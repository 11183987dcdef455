use md5::{Digest, Md5};

/// Base address of the Gravatar avatar endpoint.
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

/// Return the 32-character lowercase hex MD5 digest of an email address.
///
/// The address is hashed exactly as given: no trimming, no lowercasing.
pub fn email_digest(email: &str) -> String {
    hex::encode(Md5::digest(email.as_bytes()))
}

/// Build the Gravatar image URL for an email address.
pub fn gravatar_url(email: &str) -> String {
    format!("{GRAVATAR_BASE_URL}{}", email_digest(email))
}
