//! Envelopes arrive inside webhooks from the network; decrypting arbitrary
//! input must fail cleanly, never panic or succeed by accident.

#![no_main]

use libfuzzer_sys::fuzz_target;
use webpubsub_crypto::{CryptoError, MasterKey, decrypt};

fuzz_target!(|data: &[u8]| {
    let Ok(envelope) = std::str::from_utf8(data) else {
        return;
    };
    let key = MasterKey::from([0x42; 32]);

    match decrypt(envelope, "private-encrypted-fuzz", &key) {
        Err(CryptoError::DecryptionFailed | CryptoError::InvalidNonceLength { .. }) => {},
        Ok(_) => panic!("forged envelope opened"),
        Err(other) => panic!("unexpected error: {other}"),
    }
});
