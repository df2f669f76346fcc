//! Webhook verification and decryption.
//!
//! # Pipeline
//!
//! ```text
//! headers + raw body
//!        │
//!        ▼
//!  key matches app? ──no──► InvalidKey
//!        │
//!        ▼
//!  HMAC(secret, body) == signature? ──no──► InvalidSignature
//!        │
//!        ▼
//!  parse JSON ──err──► MalformedBody
//!        │
//!        ▼
//!  decrypt encrypted events ──any failure──► DecryptionFailed
//!        │
//!        ▼
//!     Webhook
//! ```
//!
//! Decryption builds a fresh batch and only returns it once every event has
//! been opened, so a caller never sees a half-decrypted batch.

use tracing::{debug, warn};
use webpubsub_crypto::{MasterKey, check_signature, decrypt};
use webpubsub_proto::{Webhook, WebhookEvent};

use crate::{client::Client, error::WebhookError};

/// Header carrying the app key the webhook was sent for.
pub const KEY_HEADER: &str = "X-Webhook-Key";

/// Header carrying the hex HMAC-SHA256 of the raw body.
pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// Decrypt every event on an encrypted channel.
///
/// Events on other channels are copied untouched. Order is preserved. The
/// input is left as it was whether or not this succeeds.
///
/// # Errors
///
/// `DecryptionFailed` if any encrypted event fails to open or its plaintext
/// isn't UTF-8. Earlier successes are discarded.
pub fn decrypt_events(webhook: &Webhook, master_key: &MasterKey) -> Result<Webhook, WebhookError> {
    let events = webhook
        .events
        .iter()
        .map(|event| decrypt_event(event, master_key))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Webhook { time_ms: webhook.time_ms, events })
}

fn decrypt_event(event: &WebhookEvent, master_key: &MasterKey) -> Result<WebhookEvent, WebhookError> {
    if !event.is_encrypted() {
        return Ok(event.clone());
    }

    let plaintext =
        decrypt(&event.data, &event.channel, master_key).map_err(|_| WebhookError::DecryptionFailed)?;
    let data = String::from_utf8(plaintext).map_err(|_| WebhookError::DecryptionFailed)?;

    Ok(WebhookEvent { data, ..event.clone() })
}

impl Client {
    /// Verify and decode an inbound webhook.
    ///
    /// `key_header` and `signature_header` are the values of [`KEY_HEADER`]
    /// and [`SIGNATURE_HEADER`]; `body` is the raw request body, exactly as
    /// received.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` / `InvalidSignature` if the request isn't from the
    ///   service
    /// - `MalformedBody` if the body isn't a webhook document
    /// - `MissingMasterKey` if encrypted events arrive and no master key is
    ///   configured
    /// - `DecryptionFailed` if any encrypted event fails to open
    pub fn webhook(
        &self,
        key_header: &str,
        signature_header: &str,
        body: &[u8],
    ) -> Result<Webhook, WebhookError> {
        let credentials = self.credentials();
        if key_header != credentials.key {
            warn!("rejected webhook: key mismatch");
            return Err(WebhookError::InvalidKey);
        }
        if !check_signature(signature_header, credentials.secret.as_bytes(), body) {
            warn!("rejected webhook: bad signature");
            return Err(WebhookError::InvalidSignature);
        }

        let webhook = Webhook::parse(body)?;
        let encrypted = webhook.encrypted_event_count();

        let webhook = match (self.master_key(), encrypted) {
            (_, 0) => webhook,
            (Some(master_key), _) => decrypt_events(&webhook, master_key).inspect_err(|_| {
                warn!(events = webhook.events.len(), encrypted, "rejected webhook: decryption failed");
            })?,
            (None, _) => {
                warn!(encrypted, "rejected webhook: encrypted events without master key");
                return Err(WebhookError::MissingMasterKey);
            },
        };

        debug!(events = webhook.events.len(), encrypted, "accepted webhook");
        Ok(webhook)
    }
}
