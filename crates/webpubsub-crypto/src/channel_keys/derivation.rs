//! Channel secret derivation.

use super::keys::{ChannelSecret, MasterKey};
use crate::signing::hmac_bytes;

/// Derive the secret for `channel_name` from the master key.
///
/// `HMAC-SHA256(key = master_key, message = channel_name)`. Deterministic and
/// one-way; any byte difference in the channel name, including its prefix,
/// yields an unrelated secret.
pub fn generate_shared_secret(channel_name: &str, master_key: &MasterKey) -> ChannelSecret {
    ChannelSecret::from_bytes(hmac_bytes(channel_name.as_bytes(), master_key.as_bytes()))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use proptest::prelude::*;

    use super::*;

    fn master() -> MasterKey {
        MasterKey::from([0x42; 32])
    }

    #[test]
    fn known_vector() {
        let key = MasterKey::from_bytes(b"This is a string that is 32 char").unwrap();
        let secret = generate_shared_secret("private-encrypted-bla", &key);
        assert_eq!(
            secret.as_bytes(),
            &hex!("60fe5e5b9ea661ef6528c309fbaf7d87b8eff43dd1959e072ce69f4c2592e271")
        );
    }

    #[test]
    fn derivation_is_hmac_of_channel_name() {
        let key = master();
        let secret = generate_shared_secret("private-encrypted-room", &key);
        assert_eq!(secret.as_bytes(), &hmac_bytes(b"private-encrypted-room", key.as_bytes()));
    }

    #[test]
    fn derivation_is_deterministic() {
        let key = master();
        let a = generate_shared_secret("private-encrypted-room", &key);
        let b = generate_shared_secret("private-encrypted-room", &key);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_channels_get_distinct_secrets() {
        let key = master();
        let names = [
            "private-encrypted-a",
            "private-encrypted-b",
            "private-encrypted-a ",
            "private-a",
            "encrypted-a",
        ];
        let secrets: Vec<_> = names.iter().map(|n| generate_shared_secret(n, &key)).collect();

        for (i, a) in secrets.iter().enumerate() {
            for (j, b) in secrets.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "{} and {} collided", names[i], names[j]);
                }
            }
        }
    }

    #[test]
    fn distinct_master_keys_get_distinct_secrets() {
        let a = generate_shared_secret("private-encrypted-room", &MasterKey::from([1; 32]));
        let b = generate_shared_secret("private-encrypted-room", &MasterKey::from([2; 32]));
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn different_names_never_collide(a in ".{0,40}", b in ".{0,40}") {
            prop_assume!(a != b);
            let key = master();
            prop_assert_ne!(generate_shared_secret(&a, &key), generate_shared_secret(&b, &key));
        }
    }
}
