//! Turning configuration and arguments into a signer and a request.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use http::Uri;
use oauth1_auth::{HmacSha1Signer, OAuthSigner, PlaintextSigner, RsaKeyPair, RsaSha1Signer};
use oauth1_core::{OAuthConfig, SignatureMethod};
use oauth1_params::ParameterBag;
use tracing::info;

use crate::cli::RequestArgs;

/// Build the signer selected by `OAUTH_SIGNATURE_METHOD`, reading any RSA
/// key files the configuration points at.
pub fn build_signer(config: &OAuthConfig) -> Result<OAuthSigner> {
    let signer = match config.signature_method {
        SignatureMethod::RsaSha1 => {
            let public_path = config
                .rsa_public_key_file
                .as_deref()
                .context("RSA-SHA1 requires OAUTH_RSA_PUBLIC_KEY_FILE")?;
            let mut keys = RsaKeyPair::new(read_pem(public_path)?);
            if let Some(private_path) = config.rsa_private_key_file.as_deref() {
                keys = keys.with_private_key(
                    read_pem(private_path)?,
                    config.rsa_passphrase.as_deref(),
                );
            }
            RsaSha1Signer::new(keys).into()
        }
        SignatureMethod::HmacSha1 => {
            HmacSha1Signer::new(config.consumer(), config.access_token()).into()
        }
        SignatureMethod::Plaintext => {
            PlaintextSigner::new(config.consumer(), config.access_token()).into()
        }
    };

    info!(
        signature_method = %config.signature_method,
        consumer_key = %config.consumer_key,
        "configured OAuth signer"
    );

    Ok(signer)
}

fn read_pem(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read key file {}", path.display()))
}

/// Parse the request URL and collect its parameters.
///
/// The URL's own query parameters come first, followed by `--params`.
pub fn request_parts(args: &RequestArgs) -> Result<(Uri, ParameterBag)> {
    let uri: Uri = args
        .url
        .parse()
        .with_context(|| format!("invalid request URL: {}", args.url))?;

    let mut params = ParameterBag::from_query(uri.query().unwrap_or_default());
    params.merge(&ParameterBag::from_query(&args.params))?;

    Ok((uri, params))
}

/// Parse protocol parameters given on the command line.
///
/// Accepts the JSON object printed by `sign` (string or string-array values)
/// or `application/x-www-form-urlencoded` text.
pub fn parse_auth_params(text: &str) -> Result<ParameterBag> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return Ok(ParameterBag::from_query(trimmed));
    }

    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(trimmed).context("invalid protocol parameter JSON")?;

    let mut auth = ParameterBag::new();
    for (key, value) in object {
        match value {
            serde_json::Value::String(v) => {
                auth.set(&key, v)?;
            }
            serde_json::Value::Array(items) => {
                let values = items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(v) => Ok(v),
                        other => bail!("protocol parameter {key} has a non-string value: {other}"),
                    })
                    .collect::<Result<Vec<_>>>()?;
                auth.set(&key, values)?;
            }
            other => bail!("protocol parameter {key} has a non-string value: {other}"),
        }
    }
    Ok(auth)
}
