//! `pegmint fingerprint`: compute the proof fingerprint of a mint attempt.

use anyhow::Context;
use clap::Args;
use pegmint_core::{hex, ProofFingerprint, SourceTxId};

/// Arguments for `pegmint fingerprint`.
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Source-chain transaction id (32 bytes hex).
    #[arg(long)]
    pub source_tx: String,

    /// Public-values payload (hex).
    #[arg(long)]
    pub public_values: String,

    /// Proof bytes (hex).
    #[arg(long)]
    pub proof: String,
}

/// Parse the arguments and compute the fingerprint.
pub fn compute_fingerprint(args: &FingerprintArgs) -> anyhow::Result<ProofFingerprint> {
    let source_tx =
        SourceTxId::from_hex(&args.source_tx).context("--source-tx must be 32 bytes of hex")?;
    let public_values =
        hex::decode(&args.public_values).context("--public-values is not valid hex")?;
    let proof = hex::decode(&args.proof).context("--proof is not valid hex")?;

    Ok(ProofFingerprint::compute(&source_tx, &public_values, &proof))
}

/// Compute and print the fingerprint.
pub fn run_fingerprint(args: &FingerprintArgs) -> anyhow::Result<u8> {
    let fingerprint = compute_fingerprint(args)?;
    println!("{fingerprint}");
    Ok(0)
}
