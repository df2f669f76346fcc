//! Channel subscription authorization.
//!
//! A client that wants a non-public channel posts its socket id and the
//! channel name to the app server. The app server decides whether the user
//! may subscribe and, if so, answers with an [`AuthorizationResult`] whose
//! `auth` field is `app_key:HMAC-SHA256(secret, string_to_sign)`.
//!
//! ```text
//! string_to_sign = socket_id ":" channel_name [ ":" channel_data ]
//! ```
//!
//! Encrypted channels additionally receive the channel's derived secret so
//! the subscriber can open payloads locally.

use tracing::debug;
use webpubsub_crypto::{generate_shared_secret, hmac_signature};
use webpubsub_proto::{
    AuthRequestParams, AuthorizationResult, ChannelKind, MemberData, parse_auth_request_params,
    validate_channel_name, validate_socket_id,
};

use crate::{client::Client, error::AuthError};

/// Build an authorization response.
///
/// `auth` is `key:hmac_signature(string_to_sign, secret)`. A non-empty
/// `shared_secret` is copied verbatim; an empty one leaves the field absent.
/// The caller is responsible for having validated `string_to_sign`.
pub fn create_auth_map(
    key: &str,
    secret: &[u8],
    string_to_sign: &str,
    shared_secret: &str,
) -> AuthorizationResult {
    let signature = hmac_signature(string_to_sign.as_bytes(), secret);

    AuthorizationResult {
        auth: format!("{key}:{signature}"),
        channel_data: None,
        shared_secret: (!shared_secret.is_empty()).then(|| shared_secret.to_owned()),
    }
}

/// The string a subscription signature covers.
pub fn string_to_sign(socket_id: &str, channel_name: &str, channel_data: Option<&str>) -> String {
    match channel_data {
        Some(data) => format!("{socket_id}:{channel_name}:{data}"),
        None => format!("{socket_id}:{channel_name}"),
    }
}

impl Client {
    /// Authorize a subscription to a `private-` or `private-encrypted-`
    /// channel.
    ///
    /// `body` is the raw form-encoded request body. For encrypted channels
    /// the response carries the hex channel secret.
    ///
    /// # Errors
    ///
    /// - `Params` for malformed bodies, missing fields, or invalid channel
    ///   names and socket ids
    /// - `WrongChannelKind` for public and presence channels
    /// - `MissingMasterKey` for encrypted channels without a master key
    pub fn authorize_private_channel(&self, body: &[u8]) -> Result<AuthorizationResult, AuthError> {
        let params = parse_validated(body)?;

        let shared_secret = match ChannelKind::of(&params.channel_name) {
            ChannelKind::Private => String::new(),
            ChannelKind::PrivateEncrypted => {
                let master_key = self.master_key().ok_or(AuthError::MissingMasterKey)?;
                generate_shared_secret(&params.channel_name, master_key).to_hex()
            },
            ChannelKind::Public | ChannelKind::Presence => {
                return Err(AuthError::WrongChannelKind(params.channel_name));
            },
        };

        let credentials = self.credentials();
        let result = create_auth_map(
            &credentials.key,
            credentials.secret.as_bytes(),
            &string_to_sign(&params.socket_id, &params.channel_name, None),
            &shared_secret,
        );

        debug!(
            channel = %params.channel_name,
            encrypted = result.shared_secret.is_some(),
            "authorized private channel"
        );
        Ok(result)
    }

    /// Authorize a subscription to a `presence-` channel as `member`.
    ///
    /// The member data is serialized once and that exact text is both signed
    /// and returned as `channel_data`.
    ///
    /// # Errors
    ///
    /// - `Params` for malformed bodies, missing fields, or invalid channel
    ///   names and socket ids
    /// - `WrongChannelKind` for anything but presence channels
    pub fn authorize_presence_channel(
        &self,
        body: &[u8],
        member: &MemberData,
    ) -> Result<AuthorizationResult, AuthError> {
        let params = parse_validated(body)?;
        if ChannelKind::of(&params.channel_name) != ChannelKind::Presence {
            return Err(AuthError::WrongChannelKind(params.channel_name));
        }

        let channel_data = member.to_channel_data()?;
        let credentials = self.credentials();
        let mut result = create_auth_map(
            &credentials.key,
            credentials.secret.as_bytes(),
            &string_to_sign(&params.socket_id, &params.channel_name, Some(&channel_data)),
            "",
        );
        result.channel_data = Some(channel_data);

        debug!(channel = %params.channel_name, user_id = %member.user_id, "authorized presence channel");
        Ok(result)
    }
}

fn parse_validated(body: &[u8]) -> Result<AuthRequestParams, AuthError> {
    let params = parse_auth_request_params(body)?;
    validate_socket_id(&params.socket_id)?;
    validate_channel_name(&params.channel_name)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_SIGNATURE: &str =
        "64e3f44166575febbc5de88c9476325ea7d4b3684752158d9fdb31fce34b980d";

    #[test]
    fn auth_map_without_shared_secret() {
        let result = create_auth_map("key", b"supersecret", "Hello!", "");
        assert_eq!(result.auth, format!("key:{HELLO_SIGNATURE}"));
        assert_eq!(&result.auth[4..], HELLO_SIGNATURE);
        assert_eq!(result.shared_secret, None);
        assert_eq!(result.channel_data, None);
    }

    #[test]
    fn auth_map_with_shared_secret() {
        let shared = "This is a string that is 32 chars";
        let result = create_auth_map("key", b"supersecret", "Hello!", shared);
        assert_eq!(&result.auth[4..], HELLO_SIGNATURE);
        assert_eq!(result.shared_secret.as_deref(), Some(shared));
    }

    #[test]
    fn auth_map_accepts_empty_inputs() {
        let result = create_auth_map("", b"", "", "");
        assert!(result.auth.starts_with(':'));
        assert_eq!(result.auth.len(), 1 + 64);
    }

    #[test]
    fn string_to_sign_layout() {
        assert_eq!(string_to_sign("1.2", "private-a", None), "1.2:private-a");
        assert_eq!(
            string_to_sign("1.2", "presence-a", Some(r#"{"user_id":"1"}"#)),
            r#"1.2:presence-a:{"user_id":"1"}"#
        );
    }
}
