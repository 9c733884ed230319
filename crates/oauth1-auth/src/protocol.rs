//! Assembly of the `oauth_*` protocol parameters for an outgoing request.

use oauth1_core::{AccessToken, ConsumerKey, OAUTH_VERSION, SignatureMethod, param};
use oauth1_params::ParameterBag;

use crate::error::AuthError;

/// Build the protocol parameters that accompany a signed request.
///
/// `oauth_token` is only present when a token is given. The returned bag
/// carries no `oauth_signature`; sign with it as `auth_params`, then add the
/// signature.
///
/// # Examples
///
/// ```
/// use oauth1_auth::protocol_params;
/// use oauth1_core::{ConsumerKey, SignatureMethod};
///
/// let consumer = ConsumerKey::new("ck", "cs");
/// let auth = protocol_params(&consumer, None, SignatureMethod::HmacSha1, 1_700_000_000, "n0nce")?;
/// assert_eq!(auth.get("oauth_timestamp")?, ["1700000000"]);
/// assert!(!auth.has_key("oauth_token"));
/// # Ok::<(), oauth1_auth::AuthError>(())
/// ```
pub fn protocol_params(
    consumer: &ConsumerKey,
    token: Option<&AccessToken>,
    method: SignatureMethod,
    timestamp: u64,
    nonce: &str,
) -> Result<ParameterBag, AuthError> {
    let mut auth = ParameterBag::new();
    auth.set(param::CONSUMER_KEY, consumer.key())?;
    if let Some(token) = token {
        auth.set(param::TOKEN, token.token())?;
    }
    auth.set(param::SIGNATURE_METHOD, method.as_str())?;
    auth.set(param::TIMESTAMP, timestamp)?;
    auth.set(param::NONCE, nonce)?;
    auth.set(param::VERSION, OAUTH_VERSION)?;
    Ok(auth)
}
