//! # CLI Interface
//!
//! Defines the command-line argument structure for `addrconv` using `clap`
//! derive. Four subcommands: `to-x`, `to-classic`, `decode`, and `validate`.

use clap::{Args, Parser, Subcommand};

/// Convert between classic addresses and X-addresses.
#[derive(Parser, Debug)]
#[command(
    name = "addrconv",
    about = "Convert between classic addresses and X-addresses",
    version,
    propagate_version = true
)]
pub struct AddrConvCli {
    /// Log format on stderr: `pretty` or `json`.
    #[arg(long, global = true, env = "ADDRCONV_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Print results as JSON instead of plain text.
    #[arg(long, global = true, env = "ADDRCONV_JSON")]
    pub json: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a classic address (and optional tag) as an X-address.
    ToX(ToXArgs),
    /// Recover the classic address, tag, and network from an X-address.
    ToClassic(AddressArg),
    /// Show every field packed into an X-address, including the raw account id.
    Decode(AddressArg),
    /// Check whether text is a valid classic address or X-address.
    ///
    /// Exits non-zero when it is neither.
    Validate(AddressArg),
}

/// Arguments for the `to-x` subcommand.
#[derive(Args, Debug)]
pub struct ToXArgs {
    /// Classic address (`r...`).
    pub classic_address: String,

    /// Destination tag. Must fit in 32 bits.
    #[arg(long)]
    pub tag: Option<u64>,

    /// Encode for the test network (`T...`) instead of main (`X...`).
    #[arg(long, env = "ADDRCONV_TEST_NETWORK")]
    pub test: bool,
}

/// A single address argument.
#[derive(Args, Debug)]
pub struct AddressArg {
    /// Address text.
    pub address: String,
}
