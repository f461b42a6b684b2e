//! Cryptographic Utilities
//!
//! Signed values for stateless session cookies:
//! `base64url(payload) "." base64url(HMAC-SHA256(key, payload))`, both parts
//! unpadded so the result is cookie-safe.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Fresh 32-byte secret from the OS-seeded thread RNG
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    secret
}

fn mac(key: &[u8], data: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    mac(key, data).finalize().into_bytes().into()
}

/// Constant-time comparison; only the length leaks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Error when verifying a signed value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignedValueError {
    #[error("Malformed signed value")]
    Malformed,
    #[error("Signature mismatch")]
    BadSignature,
}

/// Sign a payload
pub fn sign_value(key: &[u8], payload: &[u8]) -> String {
    format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode(hmac_sha256(key, payload))
    )
}

/// Verify a value produced by [`sign_value`] and return its payload
pub fn verify_signed_value(key: &[u8], token: &str) -> Result<Vec<u8>, SignedValueError> {
    let (payload, signature) = token.split_once('.').ok_or(SignedValueError::Malformed)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SignedValueError::Malformed)?;
    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| SignedValueError::Malformed)?;

    mac(key, &payload)
        .verify_slice(&signature)
        .map_err(|_| SignedValueError::BadSignature)?;

    Ok(payload)
}
