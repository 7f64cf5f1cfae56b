//! `pegmint encode`: build a public-values payload.

use anyhow::{bail, Context};
use clap::Args;
use pegmint_core::{encode_public_values, hex};

/// Arguments for `pegmint encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Reference as a UTF-8 string.
    #[arg(long, conflicts_with = "reference_hex")]
    pub reference: Option<String>,

    /// Reference as raw hex bytes.
    #[arg(long)]
    pub reference_hex: Option<String>,

    /// Amount in base units.
    #[arg(long)]
    pub amount: u64,
}

/// Resolve the reference bytes from whichever flag was given.
pub fn reference_bytes(args: &EncodeArgs) -> anyhow::Result<Vec<u8>> {
    match (&args.reference, &args.reference_hex) {
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(raw)) => hex::decode(raw).context("--reference-hex is not valid hex"),
        _ => bail!("exactly one of --reference or --reference-hex is required"),
    }
}

/// Encode the payload and print it as hex.
pub fn run_encode(args: &EncodeArgs) -> anyhow::Result<u8> {
    let reference = reference_bytes(args)?;
    if reference.is_empty() {
        bail!("reference must be at least one byte");
    }
    let payload = encode_public_values(&reference, args.amount);
    println!("{}", hex::encode(&payload));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use pegmint_core::decode_public_values;

    use super::*;

    #[test]
    fn encode_from_text_reference() {
        let args = EncodeArgs {
            reference: Some("dep-1".to_string()),
            reference_hex: None,
            amount: 42,
        };
        assert_eq!(run_encode(&args).unwrap(), 0);
        let payload = encode_public_values(b"dep-1", 42);
        assert_eq!(decode_public_values(&payload).unwrap().amount, 42);
    }

    #[test]
    fn encode_from_hex_reference() {
        let args = EncodeArgs {
            reference: None,
            reference_hex: Some("ff00fe".to_string()),
            amount: 1,
        };
        assert_eq!(reference_bytes(&args).unwrap(), vec![0xff, 0x00, 0xfe]);
        assert_eq!(run_encode(&args).unwrap(), 0);
    }

    #[test]
    fn encode_requires_some_reference() {
        let args = EncodeArgs {
            reference: None,
            reference_hex: None,
            amount: 1,
        };
        assert!(run_encode(&args).is_err());
    }

    #[test]
    fn encode_rejects_empty_reference() {
        let args = EncodeArgs {
            reference: Some(String::new()),
            reference_hex: None,
            amount: 1,
        };
        assert!(run_encode(&args).is_err());
    }
}
