//! Authorization response payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ProtocolError, Result};

/// Response handed back to a client that asked to subscribe to a
/// non-public channel.
///
/// Serializes as `{"auth":"key:signature"}`, with `channel_data` and
/// `shared_secret` keys present only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    /// `app_key:hex_signature`
    pub auth: String,

    /// Member data a presence channel signature covers, as JSON text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,

    /// Per-channel secret for encrypted channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

impl AuthorizationResult {
    /// Render as the JSON response body.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }
}

/// Member identity announced on a presence channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    /// Stable id of the user behind the connection
    pub user_id: String,

    /// Arbitrary public profile data shown to other members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
}

impl MemberData {
    /// Member with no extra info.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), user_info: None }
    }

    /// Attach public profile data.
    #[must_use]
    pub fn with_info(mut self, user_info: Value) -> Self {
        self.user_info = Some(user_info);
        self
    }

    /// JSON text signed into a presence authorization.
    pub fn to_channel_data(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_shared_secret_is_omitted() {
        let result = AuthorizationResult {
            auth: "key:abc".into(),
            channel_data: None,
            shared_secret: None,
        };
        insta::assert_snapshot!(result.to_json().unwrap(), @r#"{"auth":"key:abc"}"#);
    }

    #[test]
    fn present_fields_are_serialized() {
        let result = AuthorizationResult {
            auth: "key:abc".into(),
            channel_data: Some(r#"{"user_id":"1"}"#.into()),
            shared_secret: Some("00ff".into()),
        };
        insta::assert_snapshot!(
            result.to_json().unwrap(),
            @r#"{"auth":"key:abc","channel_data":"{\"user_id\":\"1\"}","shared_secret":"00ff"}"#
        );
    }

    #[test]
    fn empty_string_is_not_absent() {
        let result = AuthorizationResult {
            auth: "key:abc".into(),
            channel_data: None,
            shared_secret: Some(String::new()),
        };
        assert_eq!(result.to_json().unwrap(), r#"{"auth":"key:abc","shared_secret":""}"#);
    }

    #[test]
    fn deserializes_without_optional_keys() {
        let result: AuthorizationResult = serde_json::from_str(r#"{"auth":"k:s"}"#).unwrap();
        assert_eq!(result.shared_secret, None);
        assert_eq!(result.channel_data, None);
    }

    #[test]
    fn member_channel_data() {
        let member = MemberData::new("42");
        assert_eq!(member.to_channel_data().unwrap(), r#"{"user_id":"42"}"#);

        let member = MemberData::new("42").with_info(json!({"name": "Ada"}));
        assert_eq!(member.to_channel_data().unwrap(), r#"{"user_id":"42","user_info":{"name":"Ada"}}"#);
    }
}
