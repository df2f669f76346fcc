//! Auth request body parsing.
//!
//! Clients request authorization by posting an
//! `application/x-www-form-urlencoded` body carrying at least `socket_id` and
//! `channel_name`. Decoding is strict: the lenient decoders in most HTTP
//! stacks pass broken escapes through literally, which would let two
//! different bodies decode to the same signed string. For the same reason
//! invalid UTF-8, raw or escaped, is rejected instead of replaced.

use percent_encoding::percent_decode;

use crate::errors::{ProtocolError, Result};

/// Identifiers extracted from an auth request.
///
/// Values are returned exactly as decoded. Character-set checks belong to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequestParams {
    /// Channel the client wants to subscribe to
    pub channel_name: String,
    /// Connection the subscription is for
    pub socket_id: String,
}

/// Parse a form-encoded auth request body.
///
/// `socket_id` is checked before `channel_name`, so a body missing both
/// reports the socket id.
///
/// # Errors
///
/// - `MalformedParams` for invalid percent-escapes, `;` separators or
///   invalid UTF-8
/// - `MissingSocketId` if `socket_id` is absent
/// - `MissingChannelName` if `channel_name` is absent
pub fn parse_auth_request_params(raw: &[u8]) -> Result<AuthRequestParams> {
    let mut socket_id = None;
    let mut channel_name = None;

    for (key, value) in decode_form(raw)? {
        let slot = match key.as_str() {
            "socket_id" => &mut socket_id,
            "channel_name" => &mut channel_name,
            _ => continue,
        };
        // First occurrence wins.
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let socket_id = socket_id.ok_or(ProtocolError::MissingSocketId)?;
    let channel_name = channel_name.ok_or(ProtocolError::MissingChannelName)?;

    Ok(AuthRequestParams { channel_name, socket_id })
}

/// Strictly decode a form body into key/value pairs, in order.
///
/// Empty segments are skipped, `+` decodes to a space. A segment without `=`
/// decodes to a key with an empty value.
fn decode_form(raw: &[u8]) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for segment in raw.split(|&b| b == b'&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(&b';') {
            return Err(ProtocolError::MalformedParams("invalid semicolon separator".into()));
        }
        validate_escapes(segment)?;

        let (key, value) = match segment.iter().position(|&b| b == b'=') {
            Some(eq) => (&segment[..eq], &segment[eq + 1..]),
            None => (segment, &[][..]),
        };
        pairs.push((decode_component(key)?, decode_component(value)?));
    }

    Ok(pairs)
}

fn decode_component(raw: &[u8]) -> Result<String> {
    // '+' must become a space before unescaping so "%2B" stays a literal '+'
    let spaced: Vec<u8> = raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect();

    percent_decode(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ProtocolError::MalformedParams("invalid UTF-8".into()))
}

fn validate_escapes(segment: &[u8]) -> Result<()> {
    let mut i = 0;
    while i < segment.len() {
        if segment[i] == b'%' {
            let valid = segment
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                let end = (i + 3).min(segment.len());
                return Err(ProtocolError::MalformedParams(format!(
                    "invalid escape {:?}",
                    String::from_utf8_lossy(&segment[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
