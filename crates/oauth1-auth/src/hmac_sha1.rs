//! HMAC-SHA1 signatures (RFC 5849 §3.4.2).
//!
//! The key is `percent-encode(consumer secret) & percent-encode(token secret)`,
//! with the token secret empty when no token is involved.

use hmac::{Hmac, Mac};
use http::Uri;
use oauth1_core::{AccessToken, ConsumerKey, SignatureMethod};
use oauth1_params::ParameterBag;
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_base_string, percent_encode};
use crate::error::AuthError;
use crate::signer::{Signer, decode_signature, provided_signature};

type HmacSha1 = Hmac<Sha1>;

/// Build the HMAC-SHA1 (and PLAINTEXT) signing key.
///
/// # Examples
///
/// ```
/// use oauth1_auth::hmac_sha1::signing_key;
///
/// assert_eq!(signing_key("kd94hf93k423kf44", Some("pfkkdhi9sl3r4s00")),
///            "kd94hf93k423kf44&pfkkdhi9sl3r4s00");
/// assert_eq!(signing_key("a&b", None), "a%26b&");
/// ```
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

/// Signs with HMAC-SHA1 using the shared consumer and token secrets.
#[derive(Debug, Clone)]
pub struct HmacSha1Signer {
    consumer: ConsumerKey,
    token: Option<AccessToken>,
}

impl HmacSha1Signer {
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

    fn compute(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<Vec<u8>, AuthError> {
        let base_string = build_base_string(method, uri, params, auth_params)?;
        debug!(base_string = %base_string, "Built HMAC-SHA1 signature base string");

        let mut mac = HmacSha1::new_from_slice(self.key().as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(base_string.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl Signer for HmacSha1Signer {
    fn signature_method(&self) -> SignatureMethod {
        SignatureMethod::HmacSha1
    }

    fn make_signature(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<Vec<u8>, AuthError> {
        self.compute(method, uri, params, auth_params)
    }

    fn try_verify(
        &self,
        method: &str,
        uri: &Uri,
        params: &ParameterBag,
        auth_params: &ParameterBag,
    ) -> Result<(), AuthError> {
        let provided = decode_signature(provided_signature(auth_params)?)?;
        let expected = self.compute(method, uri, params, auth_params)?;

        if bool::from(expected.ct_eq(&provided)) {
            Ok(())
        } else {
            Err(AuthError::SignatureDoesNotMatch)
        }
    }
}
