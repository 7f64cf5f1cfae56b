//! # pegmint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps onto a tracing `EnvFilter`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pegmint_cli::decode::{run_decode, DecodeArgs};
use pegmint_cli::encode::{run_encode, EncodeArgs};
use pegmint_cli::fingerprint::{run_fingerprint, FingerprintArgs};
use pegmint_cli::fixture::{run_fixture, FixtureArgs};

/// Pegmint bridge tooling.
///
/// Encode and decode public-values payloads, compute proof fingerprints,
/// and generate mint-request fixtures for testing.
#[derive(Parser, Debug)]
#[command(name = "pegmint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex public-values payload and print its fields as JSON.
    Decode(DecodeArgs),

    /// Build a public-values payload from a reference and an amount.
    Encode(EncodeArgs),

    /// Compute the proof fingerprint of a mint attempt.
    Fingerprint(FingerprintArgs),

    /// Generate a JSON mint-request fixture with a mock-bound proof.
    Fixture(FixtureArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Decode(args) => run_decode(&args),
        Commands::Encode(args) => run_encode(&args),
        Commands::Fingerprint(args) => run_fingerprint(&args),
        Commands::Fixture(args) => run_fixture(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
