//! Encrypted channel properties.
//!
//! Exercises the public API the way a publisher and subscriber pair would:
//! one side encrypts with the master key, the other decrypts with the derived
//! channel secret it received during authorization.

use proptest::prelude::*;
use webpubsub_crypto::{
    ChannelSecret, CryptoError, EncryptedPayload, MasterKey, decrypt, encrypt,
    generate_shared_secret, open,
};

fn master_key() -> impl Strategy<Value = MasterKey> {
    any::<[u8; 32]>().prop_map(MasterKey::from)
}

fn channel_name() -> impl Strategy<Value = String> {
    "private-encrypted-[a-z0-9_-]{1,24}"
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        key in master_key(),
        channel in channel_name(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let envelope = encrypt(&channel, &plaintext, &key).unwrap().to_envelope();
        prop_assert_eq!(decrypt(&envelope, &channel, &key).unwrap(), plaintext);
    }

    #[test]
    fn subscriber_opens_with_handed_out_secret(
        key in master_key(),
        channel in channel_name(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let envelope = encrypt(&channel, &plaintext, &key).unwrap().to_envelope();

        // The subscriber only ever sees the hex secret from the auth response.
        let hex_secret = generate_shared_secret(&channel, &key).to_hex();
        let mut raw = [0u8; 32];
        hex::decode_to_slice(&hex_secret, &mut raw).unwrap();
        let secret = ChannelSecret::from_bytes(raw);

        let payload = EncryptedPayload::from_envelope(&envelope).unwrap();
        prop_assert_eq!(open(&payload, &secret).unwrap(), plaintext);
    }

    #[test]
    fn mismatched_channel_is_rejected(
        key in master_key(),
        a in channel_name(),
        b in channel_name(),
    ) {
        prop_assume!(a != b);
        let envelope = encrypt(&a, b"payload", &key).unwrap().to_envelope();
        prop_assert_eq!(decrypt(&envelope, &b, &key), Err(CryptoError::DecryptionFailed));
    }

    #[test]
    fn mismatched_key_is_rejected(a in master_key(), b in master_key(), channel in channel_name()) {
        prop_assume!(a.as_bytes() != b.as_bytes());
        let envelope = encrypt(&channel, b"payload", &a).unwrap().to_envelope();
        prop_assert_eq!(decrypt(&envelope, &channel, &b), Err(CryptoError::DecryptionFailed));
    }
}
