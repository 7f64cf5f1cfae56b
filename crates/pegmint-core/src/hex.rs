//! # Hex Helpers
//!
//! Lowercase hex encoding and decoding for fixed-width identifiers and
//! opaque byte payloads. Accepts an optional `0x` prefix on decode, since
//! upstream tooling emits prefixed hex for public values and proof bytes.

use thiserror::Error;

/// Error decoding a hex string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexError {
    /// The string length is odd or does not match the expected width.
    #[error("invalid hex length: expected {expected} characters, got {got}")]
    InvalidLength {
        /// Expected number of hex characters.
        expected: usize,
        /// Actual number of hex characters.
        got: usize,
    },

    /// A character outside `[0-9a-fA-F]` was encountered.
    #[error("invalid hex character {0:?}")]
    InvalidCharacter(char),
}

/// Encode bytes as a lowercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string into bytes. A leading `0x` prefix is permitted.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(HexError::InvalidLength {
            expected: s.len() + 1,
            got: s.len(),
        });
    }
    if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidCharacter(bad));
    }
    Ok((0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("validated hex digits"))
        .collect())
}

/// Decode a hex string into a fixed-width byte array.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    if stripped.len() != N * 2 {
        return Err(HexError::InvalidLength {
            expected: N * 2,
            got: stripped.len(),
        });
    }
    let bytes = decode(stripped)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Serde helper for hex-encoding `Vec<u8>` fields.
///
/// Use with `#[serde(with = "pegmint_core::hex::serde_hex")]` on opaque
/// byte payloads (public values, proof bytes) so JSON representations
/// stay printable.
pub mod serde_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as a lowercase hex string.
    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(bytes))
    }

    /// Deserialize bytes from a hex string (optional `0x` prefix).
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::decode(&s).map_err(serde::de::Error::custom)
    }
}
