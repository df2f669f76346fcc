//! Per-channel keys and payload encryption for encrypted channels.
//!
//! Separates the long-lived master key (held by the app owner) from the
//! per-channel secrets handed to subscribers. A subscriber authorized for one
//! encrypted channel learns only that channel's secret, never the master key
//! and never any sibling channel's secret.
//!
//! Each payload is sealed with XSalsa20-Poly1305 under the channel secret and
//! a fresh random 24-byte nonce. The nonce is large enough that random
//! generation is safe without any coordination between publishers.
//!
//! # Security
//!
//! Derivation is HMAC-SHA256 keyed by the master key over the channel name.
//! Deployed subscribers depend on these exact bytes; do not change the KDF.

pub mod derivation;
pub mod encryption;
pub mod envelope;
pub mod keys;

pub use derivation::generate_shared_secret;
pub use encryption::{EncryptedPayload, NONCE_SIZE, decrypt, encrypt, open, seal};
pub use envelope::format_message;
pub use keys::{AppSecret, CHANNEL_SECRET_SIZE, ChannelSecret, MASTER_KEY_SIZE, MasterKey};
