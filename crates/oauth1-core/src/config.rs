//! Configuration management for OAuth signing.
//!
//! All configuration is driven by environment variables. Key material is
//! referenced by file path; reading the files is left to the caller so that
//! the signing crates never touch the filesystem.

use std::fmt;
use std::path::PathBuf;

use crate::{AccessToken, ConsumerKey, CoreError, CoreResult, SignatureMethod};

/// Global configuration for OAuth request signing.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    /// Signature method used when signing.
    pub signature_method: SignatureMethod,
    /// Value sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret (HMAC-SHA1 and PLAINTEXT only).
    #[serde(skip_serializing, default)]
    pub consumer_secret: String,
    /// Value sent as `oauth_token`, if any.
    pub token: Option<String>,
    /// Token secret (HMAC-SHA1 and PLAINTEXT only).
    #[serde(skip_serializing, default)]
    pub token_secret: Option<String>,
    /// Path to the PEM-encoded RSA public key.
    pub rsa_public_key_file: Option<PathBuf>,
    /// Path to the PEM-encoded RSA private key.
    pub rsa_private_key_file: Option<PathBuf>,
    /// Passphrase protecting the RSA private key.
    #[serde(skip_serializing, default)]
    pub rsa_passphrase: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            signature_method: SignatureMethod::RsaSha1,
            consumer_key: String::new(),
            consumer_secret: String::new(),
            token: None,
            token_secret: None,
            rsa_public_key_file: None,
            rsa_private_key_file: None,
            rsa_passphrase: None,
            log_level: "info".to_owned(),
        }
    }
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("signature_method", &self.signature_method)
            .field("consumer_key", &self.consumer_key)
            .field("token", &self.token)
            .field("rsa_public_key_file", &self.rsa_public_key_file)
            .field("rsa_private_key_file", &self.rsa_private_key_file)
            .field("rsa_passphrase", &self.rsa_passphrase.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

impl OAuthConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedSignatureMethod`] if `OAUTH_SIGNATURE_METHOD`
    /// names an unknown method.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("OAUTH_SIGNATURE_METHOD") {
            config.signature_method = v.parse()?;
        }
        if let Some(v) = lookup("OAUTH_CONSUMER_KEY") {
            config.consumer_key = v;
        }
        if let Some(v) = lookup("OAUTH_CONSUMER_SECRET") {
            config.consumer_secret = v;
        }
        config.token = lookup("OAUTH_TOKEN").filter(|v| !v.is_empty());
        config.token_secret = lookup("OAUTH_TOKEN_SECRET");
        config.rsa_public_key_file = lookup("OAUTH_RSA_PUBLIC_KEY_FILE").map(PathBuf::from);
        config.rsa_private_key_file = lookup("OAUTH_RSA_PRIVATE_KEY_FILE").map(PathBuf::from);
        config.rsa_passphrase = lookup("OAUTH_RSA_PASSPHRASE");
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }

    /// Check that the settings required by the configured method are present.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] naming the first missing setting.
    pub fn validate(&self) -> CoreResult<()> {
        if self.consumer_key.is_empty() {
            return Err(CoreError::Config("OAUTH_CONSUMER_KEY is not set".to_owned()));
        }
        if self.signature_method == SignatureMethod::RsaSha1 && self.rsa_public_key_file.is_none() {
            return Err(CoreError::Config(
                "RSA-SHA1 requires OAUTH_RSA_PUBLIC_KEY_FILE".to_owned(),
            ));
        }
        Ok(())
    }

    /// The consumer credential.
    #[must_use]
    pub fn consumer(&self) -> ConsumerKey {
        ConsumerKey::new(self.consumer_key.clone(), self.consumer_secret.clone())
    }

    /// The token credential, when a token is configured.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.token.as_ref().map(|token| {
            AccessToken::new(token.clone(), self.token_secret.clone().unwrap_or_default())
        })
    }
}
