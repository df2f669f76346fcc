//! Errors for key handling and payload encryption.
//!
//! Decryption failures collapse into a single variant. Callers cannot tell a
//! wrong key from a wrong channel or tampered data, which keeps the decryptor
//! from acting as an oracle.

use thiserror::Error;

/// Errors from key construction, encryption and decryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Key material has the wrong size.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required size in bytes
        expected: usize,
        /// Size that was supplied
        actual: usize,
    },

    /// Nonce has the wrong size.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Required size in bytes
        expected: usize,
        /// Size that was supplied
        actual: usize,
    },

    /// Key text is not valid base64.
    #[error("invalid key encoding")]
    InvalidKeyEncoding,

    /// Envelope was malformed or failed authentication.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The AEAD refused to seal the plaintext.
    #[error("encryption failed")]
    EncryptionFailed,

    /// The operating system random source could not produce a nonce.
    #[error("system entropy source unavailable")]
    EntropyUnavailable,
}

/// Result alias for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decryption_message_is_generic() {
        let msg = CryptoError::DecryptionFailed.to_string();
        assert_eq!(msg, "decryption failed");
        assert!(!msg.contains("key"));
        assert!(!msg.contains("tag"));
    }
}
