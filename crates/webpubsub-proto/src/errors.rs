//! Protocol errors.

use thiserror::Error;

/// Result alias for wire-format operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors from parsing or validating wire data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Auth request body isn't valid form-encoded data.
    #[error("malformed auth request: {0}")]
    MalformedParams(String),

    /// Auth request has no `socket_id`.
    #[error("Socket_id not found")]
    MissingSocketId,

    /// Auth request has no `channel_name`.
    #[error("Channel param not found")]
    MissingChannelName,

    /// Channel name is empty, too long or uses forbidden characters.
    #[error("invalid channel name: {0:?}")]
    InvalidChannelName(String),

    /// Socket id isn't of the form `digits.digits`.
    #[error("invalid socket id: {0:?}")]
    InvalidSocketId(String),

    /// Webhook body isn't a valid webhook JSON document.
    #[error("malformed webhook body: {0}")]
    MalformedWebhook(String),

    /// A value could not be rendered as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
