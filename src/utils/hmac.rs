//! HMAC-SHA1 signature generation and validation utilities.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Generate a Base64-encoded HMAC-SHA1 digest of `message` under `key`
pub fn generate_signature(key: &str, message: &str) -> Result<String, String> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| format!("Invalid signing key: {e}"))?;
    mac.update(message.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Validate a Base64-encoded HMAC-SHA1 signature using constant-time comparison
pub fn validate_signature(key: &str, message: &str, signature: &str) -> Result<bool, String> {
    let Ok(signature_bytes) = STANDARD.decode(signature) else {
        return Ok(false);
    };

    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| format!("Invalid signing key: {e}"))?;
    mac.update(message.as_bytes());

    Ok(mac.verify_slice(&signature_bytes).is_ok())
}

/// Compare two byte strings without short-circuiting on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
