//! Request and webhook signing.
//!
//! Authorization responses and webhook bodies are authenticated with
//! HMAC-SHA256 keyed by the app secret and rendered as lowercase hex. MD5 is
//! offered only as a body digest for request integrity and must never stand
//! in for the HMAC when deciding whether a request is authentic.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Size of an HMAC-SHA256 tag in bytes.
pub const SIGNATURE_SIZE: usize = 32;

/// HMAC-SHA256 of `message` keyed by `secret`.
///
/// Any key length is accepted, including empty.
pub fn hmac_bytes(message: &[u8], secret: &[u8]) -> [u8; SIGNATURE_SIZE] {
    let mut mac = keyed_mac(secret);
    mac.update(message);

    let mut output = [0u8; SIGNATURE_SIZE];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// Lowercase hex HMAC-SHA256 of `message` keyed by `secret`.
pub fn hmac_signature(message: &[u8], secret: &[u8]) -> String {
    hex::encode(hmac_bytes(message, secret))
}

/// Lowercase hex MD5 digest of `body`.
pub fn md5_signature(body: &[u8]) -> String {
    format!("{:x}", md5::compute(body))
}

/// Check a hex signature against the HMAC of `body` under `secret`.
///
/// The comparison runs in constant time over the expected value. Anything
/// other than the exact lowercase hex digest is rejected: wrong length,
/// uppercase, non-hex characters, or a single differing digit.
pub fn check_signature(signature: &str, secret: &[u8], body: &[u8]) -> bool {
    let expected = hmac_signature(body, secret);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

fn keyed_mac(secret: &[u8]) -> HmacSha256 {
    match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        // HMAC hashes or pads keys of any length, so this arm cannot be hit.
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}
