//! `pegmint fixture`: generate a JSON mint-request fixture.
//!
//! Builds a complete [`MintRequest`] with a proof bound by the
//! deterministic mock verifier, so embedders can exercise the full mint
//! path (including a passing proof check under `MockVerifier`) without a
//! proving pipeline. The fixture also records the fingerprint the
//! gateway will compute for the request.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pegmint_core::{encode_public_values, ProgramKey, ProofFingerprint, Recipient, SourceTxId};
use pegmint_gateway::MintRequest;
use pegmint_verify::MockVerifier;

/// Arguments for `pegmint fixture`.
#[derive(Args, Debug)]
pub struct FixtureArgs {
    /// Deposit reference embedded in the public values.
    #[arg(long)]
    pub reference: String,

    /// Amount in base units.
    #[arg(long)]
    pub amount: u64,

    /// Recipient address (20 bytes hex).
    #[arg(long)]
    pub recipient: String,

    /// Source-chain transaction id (32 bytes hex).
    #[arg(long)]
    pub source_tx: String,

    /// Program key the mock proof binds to (32 bytes hex; defaults to zero).
    #[arg(long)]
    pub program_key: Option<String>,

    /// Write the fixture to this path instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Build the fixture JSON.
pub fn build_fixture(args: &FixtureArgs) -> anyhow::Result<serde_json::Value> {
    let recipient =
        Recipient::from_hex(&args.recipient).context("--recipient must be 20 bytes of hex")?;
    let source_tx_id =
        SourceTxId::from_hex(&args.source_tx).context("--source-tx must be 32 bytes of hex")?;
    let program_key = match &args.program_key {
        Some(raw) => ProgramKey::from_hex(raw).context("--program-key must be 32 bytes of hex")?,
        None => ProgramKey::zero(),
    };

    let public_values = encode_public_values(args.reference.as_bytes(), args.amount);
    let proof_bytes = MockVerifier::prove(&program_key, &public_values);
    let fingerprint = ProofFingerprint::compute(&source_tx_id, &public_values, &proof_bytes);

    let request = MintRequest {
        recipient,
        source_tx_id,
        public_values,
        proof_bytes,
    };

    Ok(serde_json::json!({
        "request": request,
        "fingerprint": fingerprint,
        "program_key": program_key,
    }))
}

/// Generate the fixture and write it to the output path or stdout.
pub fn run_fixture(args: &FixtureArgs) -> anyhow::Result<u8> {
    let fixture = build_fixture(args)?;
    let rendered = serde_json::to_string_pretty(&fixture)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write fixture to {}", path.display()))?;
            tracing::info!(path = %path.display(), "fixture written");
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}
