//! The app server's view of a webpubsub app.

use webpubsub_crypto::MasterKey;

use crate::{
    config::{ClientConfig, Credentials},
    error::ConfigError,
};

/// Credentials plus optional master key for one app.
///
/// Immutable once built, so a single client can be shared across request
/// handlers without locking.
#[derive(Debug, Clone)]
pub struct Client {
    app_id: String,
    credentials: Credentials,
    master_key: Option<MasterKey>,
}

impl Client {
    /// Build a client from configuration.
    ///
    /// Key material is copied into opaque key types; the config's own copies
    /// are wiped when it drops at the end of this call.
    ///
    /// # Errors
    ///
    /// - `EmptyKey` / `EmptySecret` for missing credentials
    /// - `InvalidMasterKey` if a master key is set but isn't 32 bytes of
    ///   valid base64
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let master_key = config
            .encryption_master_key_base64
            .as_ref()
            .map(|encoded| MasterKey::from_base64(encoded))
            .transpose()?;

        let credentials = Credentials::new(config.key, config.secret.as_bytes());
        let mut client = Self::from_credentials(config.app_id, credentials)?;
        client.master_key = master_key;
        Ok(client)
    }

    /// Build a client from credentials alone, without encrypted channels.
    pub fn from_credentials(
        app_id: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, ConfigError> {
        if credentials.key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if credentials.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self { app_id: app_id.into(), credentials, master_key: None })
    }

    /// Enable encrypted channels with the given master key.
    #[must_use]
    pub fn with_master_key(mut self, master_key: MasterKey) -> Self {
        self.master_key = Some(master_key);
        self
    }

    /// App identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Public app key.
    pub fn key(&self) -> &str {
        &self.credentials.key
    }

    /// True if encrypted channels can be used.
    pub fn has_master_key(&self) -> bool {
        self.master_key.is_some()
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn master_key(&self) -> Option<&MasterKey> {
        self.master_key.as_ref()
    }
}
