//! Error types for client operations.
//!
//! Failures are returned to the caller and never retried: every error here is
//! a deterministic function of the input. Mapping them onto HTTP statuses
//! (401 for signature failures, 400 for malformed bodies) is the HTTP
//! layer's job.

use thiserror::Error;
use webpubsub_crypto::CryptoError;
use webpubsub_proto::ProtocolError;

/// Errors from authorizing a channel subscription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The auth request body was malformed or incomplete.
    #[error(transparent)]
    Params(#[from] ProtocolError),

    /// An encrypted channel was requested but no master key is configured.
    #[error("encrypted channels require an encryption master key")]
    MissingMasterKey,

    /// The channel's kind doesn't match the authorization method used.
    #[error("channel {0:?} cannot be authorized by this method")]
    WrongChannelKind(String),
}

/// Errors from verifying and decoding a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// The key header doesn't name this app.
    #[error("webhook key does not match")]
    InvalidKey,

    /// The signature header doesn't match the body.
    #[error("invalid webhook signature")]
    InvalidSignature,

    /// The body isn't a valid webhook document.
    #[error(transparent)]
    MalformedBody(#[from] ProtocolError),

    /// The batch has encrypted events but no master key is configured.
    #[error("webhook contains encrypted events but no encryption master key is configured")]
    MissingMasterKey,

    /// An encrypted event failed to decrypt; the whole batch is rejected.
    #[error("Failed to decrypt event, possibly wrong key?")]
    DecryptionFailed,
}

/// Errors from preparing an outbound event payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// An encrypted channel was targeted but no master key is configured.
    #[error("encrypted channels require an encryption master key")]
    MissingMasterKey,

    /// Encryption itself failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Errors from building a client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("environment variable {0} not set")]
    MissingVariable(&'static str),

    /// The connection URL couldn't be parsed.
    #[error("invalid connection URL: {0}")]
    InvalidUrl(String),

    /// The connection URL has no `/apps/<id>` path.
    #[error("connection URL does not name an app")]
    MissingAppId,

    /// The app key is empty.
    #[error("app key is empty")]
    EmptyKey,

    /// The app secret is empty.
    #[error("app secret is empty")]
    EmptySecret,

    /// The master key isn't 32 bytes of valid base64.
    #[error("invalid encryption master key: {0}")]
    InvalidMasterKey(#[from] CryptoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_decryption_message_is_fixed() {
        assert_eq!(
            WebhookError::DecryptionFailed.to_string(),
            "Failed to decrypt event, possibly wrong key?"
        );
    }

    #[test]
    fn auth_param_errors_keep_their_message() {
        assert_eq!(AuthError::from(ProtocolError::MissingSocketId).to_string(), "Socket_id not found");
        assert_eq!(
            AuthError::from(ProtocolError::MissingChannelName).to_string(),
            "Channel param not found"
        );
    }

    #[test]
    fn master_key_errors_do_not_echo_key_material() {
        let err = ConfigError::from(CryptoError::InvalidKeyLength { expected: 32, actual: 16 });
        assert_eq!(
            err.to_string(),
            "invalid encryption master key: invalid key length: expected 32 bytes, got 16"
        );
    }
}
