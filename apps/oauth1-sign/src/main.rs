//! oauth1-sign - OAuth 1.0a signing from the command line.
//!
//! Prints signature base strings, signs requests with the configured
//! credentials, and verifies signatures received from elsewhere.
//!
//! # Usage
//!
//! ```text
//! OAUTH_CONSUMER_KEY=ck OAUTH_RSA_PUBLIC_KEY_FILE=pub.pem \
//!     OAUTH_RSA_PRIVATE_KEY_FILE=key.pem oauth1-sign sign --url https://example.com/a?b=c
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OAUTH_SIGNATURE_METHOD` | `RSA-SHA1` | `RSA-SHA1`, `HMAC-SHA1` or `PLAINTEXT` |
//! | `OAUTH_CONSUMER_KEY` | *(unset)* | Value sent as `oauth_consumer_key` |
//! | `OAUTH_CONSUMER_SECRET` | *(empty)* | Consumer secret (HMAC-SHA1, PLAINTEXT) |
//! | `OAUTH_TOKEN` | *(unset)* | Value sent as `oauth_token` |
//! | `OAUTH_TOKEN_SECRET` | *(empty)* | Token secret (HMAC-SHA1, PLAINTEXT) |
//! | `OAUTH_RSA_PUBLIC_KEY_FILE` | *(unset)* | PEM public key, required for RSA-SHA1 |
//! | `OAUTH_RSA_PRIVATE_KEY_FILE` | *(unset)* | PEM private key, required to sign with RSA-SHA1 |
//! | `OAUTH_RSA_PASSPHRASE` | *(unset)* | Passphrase for an encrypted private key |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;
mod setup;

use anyhow::{Context, Result};
use clap::Parser;
use oauth1_auth::{Signer, build_base_string, protocol_params};
use oauth1_core::{OAuthConfig, param};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::setup::{build_signer, parse_auth_params, request_parts};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so that stdout carries only command output.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Seconds since the Unix epoch.
fn current_timestamp() -> Result<u64> {
    u64::try_from(chrono::Utc::now().timestamp()).context("system clock is before the Unix epoch")
}

/// A fresh `oauth_nonce`.
fn generate_nonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = OAuthConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.log_level, cli.json_logs)?;

    match cli.command {
        Command::BaseString {
            request,
            auth_params,
        } => {
            let (uri, params) = request_parts(&request)?;
            let auth = parse_auth_params(&auth_params)?;
            println!("{}", build_base_string(&request.method, &uri, &params, &auth)?);
        }

        Command::Sign {
            request,
            timestamp,
            nonce,
        } => {
            config.validate()?;
            let signer = build_signer(&config)?;
            let (uri, params) = request_parts(&request)?;

            let timestamp = match timestamp {
                Some(ts) => ts,
                None => current_timestamp()?,
            };
            let nonce = nonce.unwrap_or_else(generate_nonce);
            let token = config.access_token();

            let mut auth = protocol_params(
                &config.consumer(),
                token.as_ref(),
                signer.signature_method(),
                timestamp,
                &nonce,
            )?;
            let signature = signer.sign(&request.method, &uri, &params, &auth)?;
            auth.set(param::SIGNATURE, signature)?;

            info!(method = %request.method, url = %uri, "signed request");
            println!("{}", auth.to_json());
        }

        Command::Verify {
            request,
            auth_params,
        } => {
            config.validate()?;
            let signer = build_signer(&config)?;
            let (uri, params) = request_parts(&request)?;
            let auth = parse_auth_params(&auth_params)?;

            match signer.try_verify(&request.method, &uri, &params, &auth) {
                Ok(()) => {
                    info!(method = %request.method, url = %uri, "signature verified");
                    println!("valid");
                }
                Err(e) => {
                    warn!(method = %request.method, url = %uri, error = %e, "signature rejected");
                    println!("invalid: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
