//! PLAINTEXT signatures (RFC 5849 §3.4.4).
//!
//! The signature is the signing key itself and does not depend on the
//! request. It is only safe over TLS.

use http::Uri;
use oauth1_core::{AccessToken, ConsumerKey, SignatureMethod};
use oauth1_params::ParameterBag;
use subtle::ConstantTimeEq;

use crate::error::AuthError;
use crate::hmac_sha1::signing_key;
use crate::signer::{Signer, provided_signature};

/// Sends the shared secrets as the signature.
#[derive(Debug, Clone)]
pub struct PlaintextSigner {
    consumer: ConsumerKey,
    token: Option<AccessToken>,
}

impl PlaintextSigner {
    /// Create a signer from the consumer credentials and an optional token.
    #[must_use]
    pub fn new(consumer: ConsumerKey, token: Option<AccessToken>) -> Self {
        Self { consumer, token }
    }

    fn key(&self) -> String {
        signing_key(
            self.consumer.secret(),
            self.token.as_ref().map(AccessToken::secret),
        )
    }
}

impl Signer for PlaintextSigner {
    fn signature_method(&self) -> SignatureMethod {
        SignatureMethod::Plaintext
    }

    fn make_signature(
        &self,
        _method: &str,
        _uri: &Uri,
        _params: &ParameterBag,
        _auth_params: &ParameterBag,
    ) -> Result<Vec<u8>, AuthError> {
        Ok(self.key().into_bytes())
    }

    fn try_verify(
        &self,
        _method: &str,
        _uri: &Uri,
        _params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<(), AuthError> {
        let provided = provided_signature(auth_params)?;
        if bool::from(self.key().as_bytes().ct_eq(provided.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::SignatureDoesNotMatch)
        }
    }

    fn encode_signature(&self, raw: &[u8]) -> String {
        String::from_utf8_lossy(raw).into_owned()
    }
}
