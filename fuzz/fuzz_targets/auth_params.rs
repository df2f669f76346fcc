//! Auth request bodies are attacker controlled; parsing must never panic and
//! must never invent characters that weren't in the body.

#![no_main]

use libfuzzer_sys::fuzz_target;
use url::form_urlencoded;
use webpubsub_proto::{ProtocolError, parse_auth_request_params};

fuzz_target!(|data: &[u8]| {
    match parse_auth_request_params(data) {
        Ok(params) => {
            // a raw ';' is always rejected; an escaped one may decode into a value
            assert!(!data.contains(&b';'));

            // U+FFFD only comes out if its UTF-8 bytes went in, raw or escaped
            let replacement = params.socket_id.matches('\u{FFFD}').count()
                + params.channel_name.matches('\u{FFFD}').count();
            assert!(replacement == 0 || replacement_sources(data) > 0);

            let reencoded = form_urlencoded::Serializer::new(String::new())
                .append_pair("socket_id", &params.socket_id)
                .append_pair("channel_name", &params.channel_name)
                .finish();
            assert_eq!(parse_auth_request_params(reencoded.as_bytes()), Ok(params));
        },
        Err(
            ProtocolError::MalformedParams(_)
            | ProtocolError::MissingSocketId
            | ProtocolError::MissingChannelName,
        ) => {},
        Err(other) => panic!("unexpected error: {other}"),
    }
});

/// Occurrences of a U+FFFD lead byte (0xEF), raw or as `%EF`.
fn replacement_sources(data: &[u8]) -> usize {
    let raw = data.iter().filter(|&&b| b == 0xEF).count();
    let escaped = data.windows(3).filter(|w| w[0] == b'%' && w[1..].eq_ignore_ascii_case(b"EF")).count();
    raw + escaped
}
