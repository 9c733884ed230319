//! Common OAuth 1.0a type definitions shared across crates.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The only protocol version this implementation speaks.
pub const OAUTH_VERSION: &str = "1.0";

/// Names of the OAuth protocol parameters.
pub mod param {
    /// `oauth_consumer_key`
    pub const CONSUMER_KEY: &str = "oauth_consumer_key";
    /// `oauth_token`
    pub const TOKEN: &str = "oauth_token";
    /// `oauth_nonce`
    pub const NONCE: &str = "oauth_nonce";
    /// `oauth_timestamp`
    pub const TIMESTAMP: &str = "oauth_timestamp";
    /// `oauth_signature_method`
    pub const SIGNATURE_METHOD: &str = "oauth_signature_method";
    /// `oauth_version`
    pub const VERSION: &str = "oauth_version";
    /// `oauth_signature`
    pub const SIGNATURE: &str = "oauth_signature";
    /// `realm`, only ever carried by the `Authorization` header.
    pub const REALM: &str = "realm";
}

/// A consumer (client) credential: the public key identifier and its shared secret.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConsumerKey {
    key: String,
    secret: String,
}

impl ConsumerKey {
    /// Create a new consumer credential.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The value sent as `oauth_consumer_key`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The consumer secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ConsumerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerKey")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// An access (or request) token and its secret.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccessToken {
    token: String,
    secret: String,
}

impl AccessToken {
    /// Create a new token credential.
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// The value sent as `oauth_token`.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// OAuth 1.0a signature methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum SignatureMethod {
    /// RSASSA-PKCS1-v1_5 over SHA-1.
    #[default]
    #[serde(rename = "RSA-SHA1")]
    RsaSha1,
    /// HMAC-SHA1 keyed with the consumer and token secrets.
    #[serde(rename = "HMAC-SHA1")]
    HmacSha1,
    /// The signing key in the clear.
    #[serde(rename = "PLAINTEXT")]
    Plaintext,
}

impl SignatureMethod {
    /// The value sent as `oauth_signature_method`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RsaSha1 => "RSA-SHA1",
            Self::HmacSha1 => "HMAC-SHA1",
            Self::Plaintext => "PLAINTEXT",
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RSA-SHA1" => Ok(Self::RsaSha1),
            "HMAC-SHA1" => Ok(Self::HmacSha1),
            "PLAINTEXT" => Ok(Self::Plaintext),
            _ => Err(CoreError::UnsupportedSignatureMethod(s.to_owned())),
        }
    }
}
