//! Wire formats for webpubsub channel security.
//!
//! Three shapes cross the boundary between the app server and the outside
//! world, and this crate owns all of them:
//!
//! - the form-encoded body a client posts to request channel authorization,
//!   and the JSON [`AuthorizationResult`] returned to it
//! - the JSON [`Webhook`] batch the service posts to the app server
//! - channel-name conventions, where the prefix decides whether a channel is
//!   public, private, presence or end-to-end encrypted
//!
//! Parsing is strict. Malformed percent-escapes, semicolon separators and
//! missing required fields are rejected rather than patched up, because every
//! field here ends up inside a signature.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod auth_request;
pub mod channel;
pub mod errors;
pub mod webhook;

pub use auth::{AuthorizationResult, MemberData};
pub use auth_request::{AuthRequestParams, parse_auth_request_params};
pub use channel::{
    ChannelKind, ENCRYPTED_CHANNEL_PREFIX, MAX_CHANNEL_NAME_LEN, is_encrypted_channel,
    validate_channel_name, validate_socket_id,
};
pub use errors::{ProtocolError, Result};
pub use webhook::{Webhook, WebhookEvent};
