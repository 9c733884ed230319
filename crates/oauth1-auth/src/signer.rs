//! The signing capability shared by every OAuth signature method.
//!
//! Each strategy implements [`Signer`]; [`OAuthSigner`] closes the set of
//! strategies into one enum so a method can be picked from configuration at
//! runtime.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::Uri;
use oauth1_core::{SignatureMethod, param};
use oauth1_params::ParameterBag;
use tracing::debug;

use crate::error::AuthError;
use crate::hmac_sha1::HmacSha1Signer;
use crate::plaintext::PlaintextSigner;
use crate::rsa_sha1::RsaSha1Signer;

/// Sign and verify OAuth 1.0a requests with one signature method.
///
/// `params` carries the request's query and body parameters, `auth_params`
/// the `oauth_*` protocol parameters. Both feed the same base string.
pub trait Signer {
    /// The method name sent as `oauth_signature_method`.
    fn signature_method(&self) -> SignatureMethod;

    /// Compute the raw signature bytes for a request.
    fn make_signature(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<Vec<u8>, AuthError>;

    /// Check `auth_params["oauth_signature"]`, reporting why a check failed.
    fn try_verify(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<(), AuthError>;

    /// Check `auth_params["oauth_signature"]` against the request.
    ///
    /// Never errors: a mismatch, a malformed signature, unusable key material
    /// and an unusable URL all yield `false`.
    fn verify(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> bool {
        match self.try_verify(method, uri, params, auth_params) {
            Ok(()) => {
                debug!(signature_method = %self.signature_method(), "OAuth signature verified");
                true
            }
            Err(e) => {
                debug!(
                    signature_method = %self.signature_method(),
                    error = %e,
                    "OAuth signature verification failed"
                );
                false
            }
        }
    }

    /// Encode raw signature bytes into the `oauth_signature` text form.
    fn encode_signature(&self, raw: &[u8]) -> String {
        BASE64.encode(raw)
    }

    /// Compute the signature and encode it for `oauth_signature`.
    fn sign(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<String, AuthError> {
        let raw = self.make_signature(method, uri, params, auth_params)?;
        Ok(self.encode_signature(&raw))
    }
}

/// The closed set of supported signature methods.
#[derive(Debug, Clone)]
pub enum OAuthSigner {
    /// RSA-SHA1.
    RsaSha1(RsaSha1Signer),
    /// HMAC-SHA1.
    HmacSha1(HmacSha1Signer),
    /// PLAINTEXT.
    Plaintext(PlaintextSigner),
}

impl From<RsaSha1Signer> for OAuthSigner {
    fn from(signer: RsaSha1Signer) -> Self {
        Self::RsaSha1(signer)
    }
}

impl From<HmacSha1Signer> for OAuthSigner {
    fn from(signer: HmacSha1Signer) -> Self {
        Self::HmacSha1(signer)
    }
}

impl From<PlaintextSigner> for OAuthSigner {
    fn from(signer: PlaintextSigner) -> Self {
        Self::Plaintext(signer)
    }
}

impl OAuthSigner {
    fn inner(&self) -> &dyn Signer {
        match self {
            Self::RsaSha1(signer) => signer,
            Self::HmacSha1(signer) => signer,
            Self::Plaintext(signer) => signer,
        }
    }
}

impl Signer for OAuthSigner {
    fn signature_method(&self) -> SignatureMethod {
        self.inner().signature_method()
    }

    fn make_signature(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<Vec<u8>, AuthError> {
        self.inner().make_signature(method, uri, params, auth_params)
    }

    fn try_verify(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<(), AuthError> {
        self.inner().try_verify(method, uri, params, auth_params)
    }

    fn encode_signature(&self, raw: &[u8]) -> String {
        self.inner().encode_signature(raw)
    }
}

/// The `oauth_signature` value carried by the protocol parameters.
pub(crate) fn provided_signature(auth_params: &ParameterBag) -> Result<&str, AuthError> {
    auth_params
        .get(param::SIGNATURE)?
        .first()
        .map(String::as_str)
        .ok_or(AuthError::MissingSignature)
}

/// Decode a base64 `oauth_signature` value.
pub(crate) fn decode_signature(encoded: &str) -> Result<Vec<u8>, AuthError> {
    BASE64
        .decode(encoded)
        .map_err(|e| AuthError::MalformedSignature(e.to_string()))
}
