//! Signature base string construction for OAuth 1.0a (RFC 5849 §3.4.1).
//!
//! The base string is the exact input to every signature method:
//!
//! ```text
//! HTTP-METHOD&
//! percent-encode(base string URI)&
//! percent-encode(normalized request parameters)
//! ```
//!
//! Each component is normalized so that both ends of a request compute the
//! same bytes; any deviation silently breaks interoperability.

use http::Uri;
use oauth1_core::param;
use oauth1_params::ParameterBag;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::AuthError;

/// The set of characters that must be percent-encoded.
///
/// Everything except the unreserved characters (A-Z, a-z, 0-9, `-`, `.`,
/// `_`, `~`) is encoded as `%XX` with uppercase hex, byte by byte over UTF-8.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a string with the OAuth rules.
///
/// # Examples
///
/// ```
/// use oauth1_auth::canonical::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("abcABC123-._~"), "abcABC123-._~");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Build the base string URI: lowercase scheme and host, default port
/// dropped, path kept as given, query and fragment dropped.
///
/// # Examples
///
/// ```
/// use oauth1_auth::canonical::normalize_url;
///
/// let uri: http::Uri = "HTTP://Example.COM:80/r%20v/X?id=123".parse().unwrap();
/// assert_eq!(normalize_url(&uri).unwrap(), "http://example.com/r%20v/X");
/// ```
pub fn normalize_url(uri: &Uri) -> Result<String, AuthError> {
    let scheme = uri
        .scheme_str()
        .ok_or_else(|| AuthError::InvalidUrl(format!("URL has no scheme: {uri}")))?
        .to_ascii_lowercase();
    let host = uri
        .host()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AuthError::InvalidUrl(format!("URL has no host: {uri}")))?
        .to_ascii_lowercase();

    let port_suffix = match (scheme.as_str(), uri.port_u16()) {
        ("http", Some(80)) | ("https", Some(443)) | (_, None) => String::new(),
        (_, Some(port)) => format!(":{port}"),
    };

    let path = match uri.path() {
        "" => "/",
        path => path,
    };

    Ok(format!("{scheme}://{host}{port_suffix}{path}"))
}

/// Build the normalized request parameter string.
///
/// `params` and `auth_params` are combined, `oauth_signature` and `realm`
/// are excluded, every name and value is percent-encoded, and the pairs are
/// sorted by encoded name and then by encoded value before being joined as
/// `name=value` with `&`.
///
/// # Examples
///
/// ```
/// use oauth1_auth::canonical::normalize_parameters;
/// use oauth1_params::ParameterBag;
///
/// let params = ParameterBag::from_query("b=2&a=x y&a=1");
/// assert_eq!(
///     normalize_parameters(&params, &ParameterBag::new()),
///     "a=1&a=x%20y&b=2"
/// );
/// ```
#[must_use]
pub fn normalize_parameters(params: &ParameterBag, auth_params: &ParameterBag) -> String {
    let mut pairs: Vec<(String, String)> = params
        .pairs()
        .chain(auth_params.pairs())
        .filter(|(name, _)| *name != param::SIGNATURE && *name != param::REALM)
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .collect();

    pairs.sort_unstable();

    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the full signature base string.
///
/// The result depends only on the arguments; timestamps and nonces must
/// already be present in `auth_params`.
pub fn build_base_string(
    method: &str,
    uri: &Uri,
    params: &ParameterBag,
    auth_params: &ParameterBag,
) -> Result<String, AuthError> {
    let method = method.to_ascii_uppercase();
    let base_uri = normalize_url(uri)?;
    let normalized = normalize_parameters(params, auth_params);

    Ok(format!(
        "{method}&{}&{}",
        percent_encode(&base_uri),
        percent_encode(&normalized)
    ))
}
