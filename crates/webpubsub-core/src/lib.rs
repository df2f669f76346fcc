//! App-server side of webpubsub channel security.
//!
//! A [`Client`] holds one app's credentials and, optionally, the master key
//! for end-to-end encrypted channels. It answers three questions for the
//! HTTP layer in front of it:
//!
//! - may this socket subscribe to this channel? ([`Client::authorize_private_channel`],
//!   [`Client::authorize_presence_channel`])
//! - is this webhook really from the service, and what does it say?
//!   ([`Client::webhook`])
//! - what goes on the wire for an event on this channel?
//!   ([`Client::encrypt_event_data`])
//!
//! # Example
//!
//! ```
//! use webpubsub_core::{Client, Credentials};
//!
//! let client = Client::from_credentials("123", Credentials::new("key", "secret"))?;
//! let result = client.authorize_private_channel(b"socket_id=1.2&channel_name=private-room")?;
//! assert!(result.auth.starts_with("key:"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Everything is synchronous and pure apart from the OS random source used
//! for encryption nonces. Nothing here does I/O or retries.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod webhook;

pub use auth::{create_auth_map, string_to_sign};
pub use client::Client;
pub use config::{ClientConfig, Credentials, MASTER_KEY_ENV_VAR, URL_ENV_VAR};
pub use error::{AuthError, ConfigError, PayloadError, WebhookError};
pub use webhook::{KEY_HEADER, SIGNATURE_HEADER, decrypt_events};
pub use webpubsub_crypto::MasterKey;
pub use webpubsub_proto::{AuthorizationResult, MemberData, Webhook, WebhookEvent};
