//! # Identity Newtypes
//!
//! Fixed-width identifiers for the bridge mint path. Each identifier is a
//! distinct type: a [`SourceTxId`] cannot be passed where a [`ProgramKey`]
//! is expected, even though both are 32 bytes wide.
//!
//! ## Zero Sentinels
//!
//! The all-zero value of each identifier is reserved as the "absent"
//! sentinel. The mint orchestrator rejects requests carrying a zero
//! recipient or a zero source-transaction id before touching any state.
//!
//! ## Serde
//!
//! All identifiers serialize as lowercase hex strings and validate their
//! width at deserialization time; invalid values are rejected, not
//! silently truncated or padded.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::hex;

/// Error constructing an identity value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    /// The input width does not match the identifier width.
    #[error("invalid identifier length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected byte width.
        expected: usize,
        /// Actual byte width.
        got: usize,
    },

    /// The input is not valid hex.
    #[error("invalid identifier hex: {0}")]
    InvalidHex(#[from] hex::HexError),
}

/// Implements hex `Display`, `FromStr`, `Serialize`, and a validating
/// `Deserialize` for a fixed-width byte-array newtype. Deserialization
/// routes through `from_hex()` so malformed values fail loudly.
macro_rules! impl_hex_identifier {
    ($ty:ident, $width:expr) => {
        impl $ty {
            /// Byte width of this identifier.
            pub const WIDTH: usize = $width;

            /// Construct from a fixed-width byte array.
            pub const fn from_bytes(bytes: [u8; $width]) -> Self {
                Self(bytes)
            }

            /// Construct from a byte slice, validating the width.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, IdentityError> {
                let arr: [u8; $width] =
                    bytes
                        .try_into()
                        .map_err(|_| IdentityError::InvalidLength {
                            expected: $width,
                            got: bytes.len(),
                        })?;
                Ok(Self(arr))
            }

            /// Parse from a hex string (optional `0x` prefix).
            pub fn from_hex(s: &str) -> Result<Self, IdentityError> {
                Ok(Self(hex::decode_fixed::<$width>(s)?))
            }

            /// Access the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $width] {
                &self.0
            }

            /// Render as a lowercase hex string.
            pub fn to_hex(&self) -> String {
                hex::encode(&self.0)
            }

            /// True when every byte is zero, the "absent" sentinel.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&b| b == 0)
            }

            /// The all-zero sentinel value.
            pub const fn zero() -> Self {
                Self([0u8; $width])
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = IdentityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl From<[u8; $width]> for $ty {
            fn from(bytes: [u8; $width]) -> Self {
                Self(bytes)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::from_hex(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Destination account for minted funds: a 20-byte address.
///
/// The zero address is the rejection sentinel: minting to it would burn
/// funds on most token implementations, so the orchestrator refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recipient([u8; 20]);

impl_hex_identifier!(Recipient, 20);

/// Identifier of the source-chain transaction being proven: a 32-byte
/// opaque id (a Bitcoin txid in the reference deployment).
///
/// Opaque to the ledger: it is never parsed, only compared and used as a
/// map key. Multiple mints against the same id are permitted as long as
/// each presents a distinct proof fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceTxId([u8; 32]);

impl_hex_identifier!(SourceTxId, 32);

/// Verifying key of the proving program. Identifies which program the
/// proof must attest to. Passed through to the external verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramKey([u8; 32]);

impl_hex_identifier!(ProgramKey, 32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinel_detection() {
        assert!(Recipient::zero().is_zero());
        assert!(SourceTxId::zero().is_zero());
        assert!(!Recipient::from_bytes([1u8; 20]).is_zero());
    }

    #[test]
    fn hex_roundtrip() {
        let id = SourceTxId::from_bytes([0xab; 32]);
        let parsed = SourceTxId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_width() {
        let err = Recipient::from_hex("abcd").unwrap_err();
        assert!(matches!(err, IdentityError::InvalidHex(_)));
    }

    #[test]
    fn from_slice_rejects_wrong_width() {
        let err = SourceTxId::from_slice(&[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            IdentityError::InvalidLength {
                expected: 32,
                got: 31
            }
        );
    }

    #[test]
    fn serde_roundtrip_as_hex_string() {
        let recipient = Recipient::from_bytes([0x11; 20]);
        let json = serde_json::to_string(&recipient).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(20)));
        let back: Recipient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipient);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        let result: Result<SourceTxId, _> = serde_json::from_str("\"not hex\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_to_hex() {
        let key = ProgramKey::from_bytes([0x0f; 32]);
        assert_eq!(format!("{key}"), "0f".repeat(32));
    }

    #[test]
    fn accepts_0x_prefixed_hex() {
        let id = SourceTxId::from_hex(&format!("0x{}", "22".repeat(32))).unwrap();
        assert_eq!(id.as_bytes(), &[0x22; 32]);
    }
}
