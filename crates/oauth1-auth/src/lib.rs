//! OAuth 1.0a request signing and verification.
//!
//! This crate builds the RFC 5849 signature base string from a request's
//! method, URL and parameters, and signs or verifies it with one of the
//! standard signature methods. RSA-SHA1 is the primary method; HMAC-SHA1 and
//! PLAINTEXT share the same [`Signer`] interface.
//!
//! # Usage
//!
//! ```rust
//! use oauth1_auth::{HmacSha1Signer, Signer, protocol_params};
//! use oauth1_core::{AccessToken, ConsumerKey, SignatureMethod};
//! use oauth1_params::ParameterBag;
//!
//! let consumer = ConsumerKey::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44");
//! let token = AccessToken::new("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");
//! let signer = HmacSha1Signer::new(consumer.clone(), Some(token.clone()));
//!
//! let uri: http::Uri = "http://photos.example.net/photos".parse()?;
//! let params = ParameterBag::from_query("file=vacation.jpg&size=original");
//! let mut auth = protocol_params(
//!     &consumer,
//!     Some(&token),
//!     SignatureMethod::HmacSha1,
//!     1_191_242_096,
//!     "kllo9940pd9333jh",
//! )?;
//!
//! let signature = signer.sign("GET", &uri, &params, &auth)?;
//! assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
//!
//! auth.set("oauth_signature", signature)?;
//! assert!(signer.verify("GET", &uri, &params, &auth));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Percent-encoding, URL normalization and base string construction
//! - [`error`] - Signing and verification error types
//! - [`hmac_sha1`] - HMAC-SHA1 signatures
//! - [`plaintext`] - PLAINTEXT signatures
//! - [`protocol`] - `oauth_*` protocol parameter assembly
//! - [`rsa_sha1`] - RSA-SHA1 signatures and PEM key handling
//! - [`signer`] - The [`Signer`] trait and the [`OAuthSigner`] dispatch enum

pub mod canonical;
pub mod error;
pub mod hmac_sha1;
pub mod plaintext;
pub mod protocol;
pub mod rsa_sha1;
pub mod signer;

pub use canonical::{build_base_string, normalize_url, percent_encode};
pub use error::AuthError;
pub use hmac_sha1::HmacSha1Signer;
pub use plaintext::PlaintextSigner;
pub use protocol::protocol_params;
pub use rsa_sha1::{RsaKeyPair, RsaSha1Signer};
pub use signer::{OAuthSigner, Signer};
