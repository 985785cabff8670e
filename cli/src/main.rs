// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # addrconv
//!
//! Entry point for the `addrconv` binary. Parses CLI arguments, initializes
//! logging, runs one conversion, and prints the result to stdout.
//!
//! - `to-x`       — classic address + tag -> X-address
//! - `to-classic` — X-address -> classic address + tag + network
//! - `decode`     — X-address -> every packed field
//! - `validate`   — classic address or X-address check

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

use ledger_address_codec::{
    classic_address_to_xaddress, is_valid_classic_address, is_valid_xaddress,
    xaddress_to_classic_address, Network, XAddress,
};

use cli::{AddrConvCli, Commands};
use logging::LogFormat;

fn main() -> Result<ExitCode> {
    let cli = AddrConvCli::parse();
    logging::init_logging(
        "addrconv=info,ledger_address_codec=warn",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    let outcome = run(&cli.command)?;
    println!("{}", outcome.render(cli.json)?);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// What a subcommand produced, before formatting.
struct Outcome {
    report: Report,
    success: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report {
    XAddress {
        xaddress: String,
    },
    Classic {
        classic_address: String,
        tag: Option<u32>,
        network: Network,
    },
    Decoded {
        xaddress: String,
        classic_address: String,
        account_id: String,
        tag: Option<u32>,
        network: Network,
    },
    Validity {
        address: String,
        classic_address: bool,
        xaddress: bool,
    },
}

impl Outcome {
    fn ok(report: Report) -> Self {
        Self {
            report,
            success: true,
        }
    }

    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(&self.report).context("failed to serialize report");
        }
        Ok(match &self.report {
            Report::XAddress { xaddress } => xaddress.clone(),
            Report::Classic {
                classic_address,
                tag,
                network,
            } => format!(
                "{}\ntag: {}\nnetwork: {}",
                classic_address,
                format_tag(*tag),
                network
            ),
            Report::Decoded {
                xaddress,
                classic_address,
                account_id,
                tag,
                network,
            } => format!(
                "xaddress: {}\nclassic address: {}\naccount id: {}\ntag: {}\nnetwork: {}",
                xaddress,
                classic_address,
                account_id,
                format_tag(*tag),
                network
            ),
            Report::Validity {
                address,
                classic_address,
                xaddress,
            } => {
                let verdict = if *classic_address {
                    "valid classic address"
                } else if *xaddress {
                    "valid X-address"
                } else {
                    "invalid"
                };
                format!("{}: {}", address, verdict)
            }
        })
    }
}

fn format_tag(tag: Option<u32>) -> String {
    tag.map_or_else(|| "none".to_string(), |t| t.to_string())
}

fn run(command: &Commands) -> Result<Outcome> {
    match command {
        Commands::ToX(args) => {
            let xaddress = classic_address_to_xaddress(&args.classic_address, args.tag, args.test)
                .with_context(|| format!("cannot convert {}", args.classic_address))?;
            tracing::debug!(%xaddress, tag = ?args.tag, test = args.test, "encoded X-address");
            Ok(Outcome::ok(Report::XAddress { xaddress }))
        }
        Commands::ToClassic(arg) => {
            let (classic_address, tag, is_test) = xaddress_to_classic_address(&arg.address)
                .with_context(|| format!("cannot decode {}", arg.address))?;
            Ok(Outcome::ok(Report::Classic {
                classic_address,
                tag,
                network: Network::from_is_test(is_test),
            }))
        }
        Commands::Decode(arg) => {
            let x: XAddress = arg
                .address
                .parse()
                .with_context(|| format!("cannot decode {}", arg.address))?;
            Ok(Outcome::ok(Report::Decoded {
                xaddress: arg.address.clone(),
                classic_address: x.classic_address(),
                account_id: hex::encode_upper(x.account_id.as_bytes()),
                tag: x.tag,
                network: x.network,
            }))
        }
        Commands::Validate(arg) => {
            let classic_address = is_valid_classic_address(&arg.address);
            let xaddress = is_valid_xaddress(&arg.address);
            if !classic_address && !xaddress {
                tracing::warn!(address = %arg.address, "not a valid address");
            }
            Ok(Outcome {
                report: Report::Validity {
                    address: arg.address.clone(),
                    classic_address,
                    xaddress,
                },
                success: classic_address || xaddress,
            })
        }
    }
}
