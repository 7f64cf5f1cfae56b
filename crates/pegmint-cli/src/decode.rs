//! `pegmint decode`: decode a public-values payload.

use anyhow::Context;
use clap::Args;
use pegmint_core::{decode_public_values, hex};

/// Arguments for `pegmint decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded public-values payload (optional 0x prefix).
    pub payload: String,
}

/// Decode the payload and print its fields as JSON.
///
/// The reference is printed as hex, plus as UTF-8 when it happens to be
/// valid text.
pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<u8> {
    let bytes = hex::decode(&args.payload).context("payload is not valid hex")?;
    let pv = decode_public_values(&bytes).context("payload does not decode")?;

    let mut out = serde_json::json!({
        "reference_hex": hex::encode(&pv.reference),
        "amount": pv.amount,
    });
    if let Ok(text) = std::str::from_utf8(&pv.reference) {
        out["reference_utf8"] = serde_json::Value::String(text.to_string());
    }

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(0)
}
