//! Payload encryption with XSalsa20-Poly1305.
//!
//! Output is NaCl `crypto_secretbox` compatible: the 16-byte Poly1305 tag is
//! prepended to the ciphertext. The nonce travels next to the ciphertext in
//! the wire envelope.
//!
//! # Nonce
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ 24 bytes from the OS CSPRNG, per message │
//! └─────────────────────────────────────────┘
//! ```
//!
//! 192 random bits make collisions under one channel secret negligible
//! without any shared counter between publishers.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{Aead, KeyInit, generic_array::GenericArray},
};

use super::{
    derivation::generate_shared_secret,
    envelope::{WireEnvelope, format_message},
    keys::{ChannelSecret, MasterKey},
};
use crate::error::{CryptoError, Result};

/// Size of the secretbox nonce in bytes.
pub const NONCE_SIZE: usize = 24;

/// A sealed payload: nonce plus tag-prefixed ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    /// Random nonce used for this payload
    pub nonce: [u8; NONCE_SIZE],
    /// Poly1305 tag followed by the XSalsa20 ciphertext
    pub ciphertext: Vec<u8>,
}

impl EncryptedPayload {
    /// Render as the JSON wire envelope.
    pub fn to_envelope(&self) -> String {
        format_message(&STANDARD.encode(self.nonce), &STANDARD.encode(&self.ciphertext))
    }

    /// Parse the JSON wire envelope.
    ///
    /// # Errors
    ///
    /// - `DecryptionFailed` for malformed JSON or base64
    /// - `InvalidNonceLength` if the nonce doesn't decode to 24 bytes
    pub fn from_envelope(envelope: &str) -> Result<Self> {
        let wire: WireEnvelope =
            serde_json::from_str(envelope).map_err(|_| CryptoError::DecryptionFailed)?;

        let nonce_bytes =
            STANDARD.decode(wire.nonce.as_bytes()).map_err(|_| CryptoError::DecryptionFailed)?;
        let ciphertext = STANDARD
            .decode(wire.ciphertext.as_bytes())
            .map_err(|_| CryptoError::DecryptionFailed)?;

        let nonce: [u8; NONCE_SIZE] = nonce_bytes.as_slice().try_into().map_err(|_| {
            CryptoError::InvalidNonceLength { expected: NONCE_SIZE, actual: nonce_bytes.len() }
        })?;

        Ok(Self { nonce, ciphertext })
    }
}

/// Encrypt `plaintext` for `channel_name` with a fresh random nonce.
///
/// # Errors
///
/// `EntropyUnavailable` if the OS random source fails.
pub fn encrypt(
    channel_name: &str,
    plaintext: &[u8],
    master_key: &MasterKey,
) -> Result<EncryptedPayload> {
    let mut nonce = [0u8; NONCE_SIZE];
    getrandom::fill(&mut nonce).map_err(|_| CryptoError::EntropyUnavailable)?;

    let secret = generate_shared_secret(channel_name, master_key);
    seal(&secret, nonce, plaintext)
}

/// Seal `plaintext` under a channel secret with a caller-chosen nonce.
///
/// Never reuse a nonce with the same secret. [`encrypt`] is the safe entry
/// point; this exists for deterministic tests and known-answer vectors.
pub fn seal(
    secret: &ChannelSecret,
    nonce: [u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<EncryptedPayload> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(secret.as_bytes().as_slice()));
    let ciphertext = cipher
        .encrypt(GenericArray::from_slice(nonce.as_slice()), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    Ok(EncryptedPayload { nonce, ciphertext })
}

/// Open a sealed payload with a channel secret.
///
/// # Errors
///
/// `DecryptionFailed` if the tag doesn't verify. Wrong key, wrong channel and
/// tampered data are deliberately indistinguishable.
pub fn open(payload: &EncryptedPayload, secret: &ChannelSecret) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(secret.as_bytes().as_slice()));
    cipher
        .decrypt(GenericArray::from_slice(payload.nonce.as_slice()), payload.ciphertext.as_slice())
        .map_err(|_| CryptoError::DecryptionFailed)
}

/// Decrypt a JSON wire envelope published on `channel_name`.
///
/// # Errors
///
/// - `DecryptionFailed` for malformed envelopes and authentication failures
/// - `InvalidNonceLength` for a nonce that isn't 24 bytes
pub fn decrypt(envelope: &str, channel_name: &str, master_key: &MasterKey) -> Result<Vec<u8>> {
    let payload = EncryptedPayload::from_envelope(envelope)?;
    let secret = generate_shared_secret(channel_name, master_key);
    open(&payload, &secret)
}
