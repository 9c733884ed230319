//! Error types for the OAuth core.

/// Core error type for OAuth configuration and type parsing.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The signature method name is not one of `RSA-SHA1`, `HMAC-SHA1` or `PLAINTEXT`.
    #[error("unsupported signature method: {0}")]
    UnsupportedSignatureMethod(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
