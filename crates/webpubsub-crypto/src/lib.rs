//! webpubsub Cryptographic Primitives
//!
//! Cryptographic building blocks for channel authorization, webhook
//! verification and encrypted channels. Pure functions with deterministic
//! outputs, except for nonce generation in [`encrypt`]. Callers that need
//! determinism supply their own nonce through [`seal`].
//!
//! # Key Lifecycle
//!
//! The application owner holds a single 32-byte master encryption key. It is
//! never transmitted. Every encrypted channel gets its own secret, derived by
//! keying HMAC-SHA256 with the master key over the exact channel name. The
//! derived secret is handed to subscribers during authorization and keys the
//! secretbox for every payload published on that channel.
//!
//! ```text
//! Master Encryption Key (32 bytes)
//!        │
//!        ▼ HMAC-SHA256(master, channel_name)
//! Channel Secret (per channel)
//!        │
//!        ▼ + random 24-byte nonce
//! XSalsa20-Poly1305 → {"nonce":…,"ciphertext":…}
//! ```
//!
//! # Security
//!
//! Channel isolation:
//! - The full channel name, prefix included, is the HMAC message, so a
//!   secret derived for one channel is useless on any other
//!
//! Authenticity:
//! - Request and webhook signatures are HMAC-SHA256 under the app secret
//! - Signature checks compare in constant time and are case-sensitive
//! - Payload decryption fails closed with one generic error for wrong key,
//!   wrong channel and tampered ciphertext alike
//!
//! Key hygiene:
//! - [`MasterKey`], [`ChannelSecret`] and [`AppSecret`] zeroize on drop and
//!   redact themselves in `Debug` output

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod channel_keys;
pub mod error;
pub mod signing;

pub use channel_keys::{
    AppSecret, CHANNEL_SECRET_SIZE, ChannelSecret, EncryptedPayload, MASTER_KEY_SIZE, MasterKey,
    NONCE_SIZE, decrypt, encrypt, format_message, generate_shared_secret, open, seal,
};
pub use error::{CryptoError, Result};
pub use signing::{SIGNATURE_SIZE, check_signature, hmac_bytes, hmac_signature, md5_signature};
