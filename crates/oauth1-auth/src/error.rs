//! Signing and verification error types.

use oauth1_params::ParamsError;

/// Errors produced while building a base string, signing or verifying.
///
/// [`Signer::verify`](crate::Signer::verify) folds every one of these into
/// `false`; [`Signer::try_verify`](crate::Signer::try_verify) reports which
/// one occurred.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request URL lacks a scheme or a host.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The signer is missing material it needs for this operation.
    #[error("signer configuration error: {0}")]
    Configuration(String),

    /// The private key could not be decrypted or parsed, or the signing
    /// primitive failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The public key could not be parsed.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// `oauth_signature` is absent from the protocol parameters.
    #[error("missing oauth_signature parameter")]
    MissingSignature,

    /// `oauth_signature` is not valid base64.
    #[error("malformed oauth_signature: {0}")]
    MalformedSignature(String),

    /// The signature does not match the request.
    #[error("signature does not match")]
    SignatureDoesNotMatch,

    /// A parameter store operation failed.
    #[error(transparent)]
    Params(#[from] ParamsError),
}
