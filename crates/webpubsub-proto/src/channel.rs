//! Channel naming conventions.
//!
//! The prefix of a channel name is part of the trust boundary: it decides
//! which authorization flow applies and whether payloads are encrypted. Since
//! the full name (prefix included) is both signed and used for secret
//! derivation, a credential for one channel can't be replayed on another.

use crate::errors::{ProtocolError, Result};

/// Prefix marking channels whose payloads are end-to-end encrypted.
pub const ENCRYPTED_CHANNEL_PREFIX: &str = "private-encrypted-";

/// Prefix for private channels.
pub const PRIVATE_CHANNEL_PREFIX: &str = "private-";

/// Prefix for presence channels.
pub const PRESENCE_CHANNEL_PREFIX: &str = "presence-";

/// Longest channel name the service accepts.
pub const MAX_CHANNEL_NAME_LEN: usize = 200;

/// Kind of channel, by name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// No prefix; anyone may subscribe
    Public,
    /// `private-`; subscription requires a signature
    Private,
    /// `presence-`; subscription requires a signature over member data
    Presence,
    /// `private-encrypted-`; signature plus a per-channel shared secret
    PrivateEncrypted,
}

impl ChannelKind {
    /// Classify a channel name.
    pub fn of(channel_name: &str) -> Self {
        if channel_name.starts_with(ENCRYPTED_CHANNEL_PREFIX) {
            Self::PrivateEncrypted
        } else if channel_name.starts_with(PRIVATE_CHANNEL_PREFIX) {
            Self::Private
        } else if channel_name.starts_with(PRESENCE_CHANNEL_PREFIX) {
            Self::Presence
        } else {
            Self::Public
        }
    }
}

/// True if payloads on `channel_name` are encrypted.
pub fn is_encrypted_channel(channel_name: &str) -> bool {
    channel_name.starts_with(ENCRYPTED_CHANNEL_PREFIX)
}

/// Check a channel name against the service's naming rules.
///
/// Names are 1 to 200 characters from `A-Z a-z 0-9 _ - = @ , . ;`.
pub fn validate_channel_name(channel_name: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "_-=@,.;".contains(c);

    if channel_name.is_empty()
        || channel_name.len() > MAX_CHANNEL_NAME_LEN
        || !channel_name.chars().all(allowed)
    {
        return Err(ProtocolError::InvalidChannelName(channel_name.to_owned()));
    }
    Ok(())
}

/// Check that a socket id has the form `digits.digits`.
pub fn validate_socket_id(socket_id: &str) -> Result<()> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match socket_id.split_once('.') {
        Some((left, right)) if is_digits(left) && is_digits(right) => Ok(()),
        _ => Err(ProtocolError::InvalidSocketId(socket_id.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(ChannelKind::of("private-encrypted-bla"), ChannelKind::PrivateEncrypted);
        assert_eq!(ChannelKind::of("private-bla"), ChannelKind::Private);
        assert_eq!(ChannelKind::of("presence-bla"), ChannelKind::Presence);
        assert_eq!(ChannelKind::of("bla"), ChannelKind::Public);
        assert_eq!(ChannelKind::of("encrypted-bla"), ChannelKind::Public);
    }

    #[test]
    fn prefix_must_lead() {
        assert!(!is_encrypted_channel("x-private-encrypted-bla"));
        assert!(!is_encrypted_channel("Private-encrypted-bla"));
        assert!(is_encrypted_channel("private-encrypted-"));
    }

    #[test]
    fn channel_name_rules() {
        assert!(validate_channel_name("private-chat_room=1@a,b.c;d").is_ok());
        assert!(validate_channel_name(&"a".repeat(MAX_CHANNEL_NAME_LEN)).is_ok());

        assert!(validate_channel_name("").is_err());
        assert!(validate_channel_name(&"a".repeat(MAX_CHANNEL_NAME_LEN + 1)).is_err());
        assert!(validate_channel_name("private chat").is_err());
        assert!(validate_channel_name("private-ünïcode").is_err());
        assert!(validate_channel_name("a:b").is_err());
    }

    #[test]
    fn socket_id_rules() {
        assert!(validate_socket_id("45.3").is_ok());
        assert!(validate_socket_id("44610.7511910").is_ok());

        for bad in ["", "45", "45.", ".3", "a.3", "45.3.1", "45.3\n", " 45.3", "45:3"] {
            assert_eq!(
                validate_socket_id(bad),
                Err(ProtocolError::InvalidSocketId(bad.to_owned())),
                "{bad:?}"
            );
        }
    }
}
