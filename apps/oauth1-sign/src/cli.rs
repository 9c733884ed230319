//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

/// Build, sign and verify OAuth 1.0a signature base strings.
#[derive(Parser, Debug)]
#[command(name = "oauth1-sign")]
#[command(version)]
pub struct Cli {
    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the signature base string for a request.
    BaseString {
        #[command(flatten)]
        request: RequestArgs,

        /// Protocol parameters as form-encoded text (`oauth_nonce=...&...`) or
        /// the JSON object printed by `sign`
        #[arg(long, default_value = "")]
        auth_params: String,
    },

    /// Sign a request with the configured credentials and print the
    /// protocol parameters, including `oauth_signature`, as JSON.
    Sign {
        #[command(flatten)]
        request: RequestArgs,

        /// Fixed `oauth_timestamp` (defaults to the current time)
        #[arg(long)]
        timestamp: Option<u64>,

        /// Fixed `oauth_nonce` (defaults to a random value)
        #[arg(long)]
        nonce: Option<String>,
    },

    /// Verify the `oauth_signature` carried in the protocol parameters.
    ///
    /// Exits with status 1 when the signature does not verify.
    Verify {
        #[command(flatten)]
        request: RequestArgs,

        /// Protocol parameters including `oauth_signature`: either the JSON
        /// object printed by `sign`, or form-encoded text (where a literal `+`
        /// must be written as `%2B`)
        #[arg(long)]
        auth_params: String,
    },
}

/// The request being signed.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Absolute request URL; its query parameters are signed too
    #[arg(long)]
    pub url: String,

    /// Additional request parameters as form-encoded text (e.g. a form body)
    #[arg(long, default_value = "")]
    pub params: String,
}
