//! Outbound event payloads.

use webpubsub_crypto::encrypt;
use webpubsub_proto::is_encrypted_channel;

use crate::{client::Client, error::PayloadError};

impl Client {
    /// Prepare `data` for publishing on `channel`.
    ///
    /// On `private-encrypted-` channels this returns the JSON wire envelope
    /// under a fresh nonce. On any other channel `data` is returned as is.
    ///
    /// # Errors
    ///
    /// - `MissingMasterKey` for encrypted channels without a master key
    /// - `Crypto` if the OS random source fails
    pub fn encrypt_event_data(&self, channel: &str, data: &str) -> Result<String, PayloadError> {
        if !is_encrypted_channel(channel) {
            return Ok(data.to_owned());
        }

        let master_key = self.master_key().ok_or(PayloadError::MissingMasterKey)?;
        Ok(encrypt(channel, data.as_bytes(), master_key)?.to_envelope())
    }
}

#[cfg(test)]
mod tests {
    use webpubsub_crypto::{MasterKey, decrypt};

    use super::*;
    use crate::config::Credentials;

    fn client() -> Client {
        Client::from_credentials("1", Credentials::new("key", "secret")).unwrap()
    }

    #[test]
    fn plain_channels_pass_through() {
        let client = client();
        assert_eq!(client.encrypt_event_data("private-a", "{\"x\":1}").unwrap(), "{\"x\":1}");
        assert_eq!(client.encrypt_event_data("presence-a", "").unwrap(), "");
    }

    #[test]
    fn encrypted_channels_need_a_master_key() {
        assert_eq!(
            client().encrypt_event_data("private-encrypted-a", "hi"),
            Err(PayloadError::MissingMasterKey)
        );
    }

    #[test]
    fn encrypted_channels_get_an_envelope() {
        let key = MasterKey::from([0x33; 32]);
        let client = client().with_master_key(key.clone());

        let envelope = client.encrypt_event_data("private-encrypted-a", "hi").unwrap();
        assert!(envelope.starts_with("{\"nonce\":\""));
        assert_eq!(decrypt(&envelope, "private-encrypted-a", &key).unwrap(), b"hi");
    }
}
