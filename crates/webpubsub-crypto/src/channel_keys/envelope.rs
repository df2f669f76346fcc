//! JSON wire envelope for encrypted payloads.
//!
//! The envelope is byte-exact: `{"nonce":"<b64>","ciphertext":"<b64>"}` with
//! that key order and no whitespace. Subscribers parse it with ordinary JSON
//! decoders, but publishers must emit exactly this form.

use serde::Deserialize;
use serde_json::Value;

/// Envelope as read off the wire. Extra keys are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct WireEnvelope {
    pub(crate) nonce: String,
    pub(crate) ciphertext: String,
}

/// Wrap base64 nonce and ciphertext into the wire envelope.
///
/// Values are JSON-escaped, which is a no-op for base64 text.
pub fn format_message(nonce_b64: &str, ciphertext_b64: &str) -> String {
    format!(
        "{{\"nonce\":{},\"ciphertext\":{}}}",
        Value::from(nonce_b64),
        Value::from(ciphertext_b64)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_is_byte_exact() {
        assert_eq!(format_message("a", "b"), r#"{"nonce":"a","ciphertext":"b"}"#);
    }

    #[test]
    fn format_message_keeps_base64_verbatim() {
        let formatted = format_message("sjklahvpWWQgAjTx5FfYHCCxd2AmaL9T", "zoDEe8dA3nDXKsybAWce/hXGW4szJw==");
        assert_eq!(
            formatted,
            r#"{"nonce":"sjklahvpWWQgAjTx5FfYHCCxd2AmaL9T","ciphertext":"zoDEe8dA3nDXKsybAWce/hXGW4szJw=="}"#
        );
    }

    #[test]
    fn format_message_escapes_quotes() {
        let formatted = format_message("a\"b", "c");
        let parsed: WireEnvelope = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed.nonce, "a\"b");
        assert_eq!(parsed.ciphertext, "c");
    }

    #[test]
    fn wire_envelope_ignores_unknown_keys() {
        let parsed: WireEnvelope =
            serde_json::from_str(r#"{"ciphertext":"c","nonce":"n","v":1}"#).unwrap();
        assert_eq!(parsed.nonce, "n");
        assert_eq!(parsed.ciphertext, "c");
    }
}
