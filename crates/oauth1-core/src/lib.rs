//! Core types and configuration for OAuth 1.0a request signing.
//!
//! This crate provides the building blocks shared by the parameter store,
//! the signature engine and the command-line tool: consumer/token
//! credentials, the set of supported signature methods, the names of the
//! OAuth protocol parameters and environment-driven configuration.

mod config;
mod error;
mod types;

pub use config::OAuthConfig;
pub use error::{CoreError, CoreResult};
pub use types::{AccessToken, ConsumerKey, OAUTH_VERSION, SignatureMethod, param};
