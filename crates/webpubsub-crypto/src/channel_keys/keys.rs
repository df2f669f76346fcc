//! Opaque key material.
//!
//! Secrets get their own types so they can't be concatenated into strings or
//! logged by accident. All of them zeroize on drop and redact in `Debug`.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};

/// Size of the master encryption key in bytes.
pub const MASTER_KEY_SIZE: usize = 32;

/// Size of a derived channel secret in bytes.
pub const CHANNEL_SECRET_SIZE: usize = 32;

/// The app owner's master encryption key.
///
/// Root of every channel secret. Exactly [`MASTER_KEY_SIZE`] bytes; other
/// sizes are rejected rather than padded or truncated.
#[derive(Clone)]
pub struct MasterKey(Zeroizing<[u8; MASTER_KEY_SIZE]>);

impl MasterKey {
    /// Build a master key from raw bytes.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` unless `bytes` is exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != MASTER_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: MASTER_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = Zeroizing::new([0u8; MASTER_KEY_SIZE]);
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Build a master key from standard base64 text.
    ///
    /// # Errors
    ///
    /// `InvalidKeyEncoding` if the text isn't base64, `InvalidKeyLength` if it
    /// doesn't decode to 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let decoded = Zeroizing::new(
            STANDARD.decode(encoded.trim()).map_err(|_| CryptoError::InvalidKeyEncoding)?,
        );
        Self::from_bytes(&decoded)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; MASTER_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; MASTER_KEY_SIZE]> for MasterKey {
    fn from(bytes: [u8; MASTER_KEY_SIZE]) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey([REDACTED])")
    }
}

/// Secret derived for a single channel.
///
/// Keys the secretbox for that channel's payloads and is handed verbatim to
/// authorized subscribers.
#[derive(Clone)]
pub struct ChannelSecret(Zeroizing<[u8; CHANNEL_SECRET_SIZE]>);

impl ChannelSecret {
    /// Wrap raw secret bytes.
    pub fn from_bytes(bytes: [u8; CHANNEL_SECRET_SIZE]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Raw secret bytes.
    pub fn as_bytes(&self) -> &[u8; CHANNEL_SECRET_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering, as sent in authorization responses.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_slice())
    }
}

impl PartialEq for ChannelSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for ChannelSecret {}

impl fmt::Debug for ChannelSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChannelSecret([REDACTED])")
    }
}

/// The app's signing secret.
///
/// Shared with the service, never transmitted. Any length is accepted.
#[derive(Clone)]
pub struct AppSecret(Zeroizing<Vec<u8>>);

impl AppSecret {
    /// Wrap secret bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    /// Raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when no secret was configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret([REDACTED])")
    }
}
