//! # Public-Values Codec
//!
//! The proving program commits a length-prefixed binary record as its
//! public output:
//!
//! ```text
//! [ 0 ..  8)  little-endian u64 length L of the reference
//! [ 8 .. 8+L) reference bytes (opaque, may be non-UTF-8)
//! [8+L .. 16+L) little-endian u64 amount
//! ```
//!
//! The buffer arrives from an untrusted caller, so decoding is total:
//! every length computation is overflow-checked and every failure maps to
//! [`DecodeError::Malformed`]. The mint path deliberately treats a
//! malformed payload the same as a zero-amount payload; both are
//! rejected through the zero-amount gate, and the decoder does not
//! distinguish further. Direct callers (the CLI, diagnostics) still get
//! the structured error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum well-formed payload: 8-byte length prefix, one reference byte,
/// 8-byte amount.
pub const MIN_PAYLOAD_LEN: usize = 17;

/// Error decoding a public-values payload.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload does not match the length-prefixed layout.
    #[error("malformed public values: {0}")]
    Malformed(&'static str),
}

/// Decoded public output of the proving program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicValues {
    /// Opaque reference bytes (a deposit reference in the reference
    /// deployment). Not validated beyond length; may be any byte
    /// sequence, including non-UTF-8.
    pub reference: Vec<u8>,
    /// Claimed amount in base units.
    pub amount: u64,
}

/// Decode a length-prefixed public-values payload.
///
/// Validation order:
/// 1. `buf.len() >= 17` (minimum one-byte reference).
/// 2. `8 + L + 8` computed with checked u64 arithmetic must not overflow
///    and must not exceed `buf.len()`.
/// 3. Slice out the reference and the trailing little-endian amount.
///
/// Bytes past `16 + L` are ignored; the prefix decides the record extent.
pub fn decode_public_values(buf: &[u8]) -> Result<PublicValues, DecodeError> {
    if buf.len() < MIN_PAYLOAD_LEN {
        return Err(DecodeError::Malformed("payload shorter than 17 bytes"));
    }

    let len_prefix: [u8; 8] = buf[0..8].try_into().expect("length checked above");
    let reference_len = u64::from_le_bytes(len_prefix);

    // 8 + L + 8, overflow-checked. L is attacker-controlled and may be
    // anything up to u64::MAX.
    let needed = 8u64
        .checked_add(reference_len)
        .and_then(|n| n.checked_add(8))
        .ok_or(DecodeError::Malformed("reference length overflows"))?;
    if needed > buf.len() as u64 {
        return Err(DecodeError::Malformed(
            "reference length exceeds payload size",
        ));
    }

    // needed <= buf.len() <= usize::MAX, so the cast is lossless.
    let reference_len = reference_len as usize;
    let reference = buf[8..8 + reference_len].to_vec();
    let amount_bytes: [u8; 8] = buf[8 + reference_len..16 + reference_len]
        .try_into()
        .expect("bounds checked above");
    let amount = u64::from_le_bytes(amount_bytes);

    Ok(PublicValues { reference, amount })
}

/// Encode a public-values payload, the exact inverse of
/// [`decode_public_values`]. Used by fixture generation and tests.
pub fn encode_public_values(reference: &[u8], amount: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + reference.len());
    buf.extend_from_slice(&(reference.len() as u64).to_le_bytes());
    buf.extend_from_slice(reference);
    buf.extend_from_slice(&amount.to_le_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_minimal_payload() {
        // L=1, reference = [0x42], amount = 1.
        let buf = encode_public_values(&[0x42], 1);
        assert_eq!(buf.len(), MIN_PAYLOAD_LEN);
        let pv = decode_public_values(&buf).unwrap();
        assert_eq!(pv.reference, vec![0x42]);
        assert_eq!(pv.amount, 1);
    }

    #[test]
    fn decode_recovers_exact_fields() {
        let reference = b"order-7f3a/deposit".to_vec();
        let amount = 1_240_000_000u64;
        let buf = encode_public_values(&reference, amount);
        let pv = decode_public_values(&buf).unwrap();
        assert_eq!(pv.reference, reference);
        assert_eq!(pv.amount, amount);
    }

    #[test]
    fn decode_non_utf8_reference() {
        let reference = vec![0xff, 0x00, 0xfe, 0x80];
        let pv = decode_public_values(&encode_public_values(&reference, 9)).unwrap();
        assert_eq!(pv.reference, reference);
    }

    #[test]
    fn decode_rejects_short_buffers() {
        for len in 0..MIN_PAYLOAD_LEN {
            let buf = vec![0u8; len];
            assert_eq!(
                decode_public_values(&buf),
                Err(DecodeError::Malformed("payload shorter than 17 bytes")),
                "length {len} must be rejected"
            );
        }
    }

    #[test]
    fn decode_rejects_length_exceeding_buffer() {
        // Claims a 100-byte reference but only carries 9 payload bytes.
        let mut buf = 100u64.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0u8; 9]);
        assert_eq!(
            decode_public_values(&buf),
            Err(DecodeError::Malformed(
                "reference length exceeds payload size"
            ))
        );
    }

    #[test]
    fn decode_rejects_overflowing_length() {
        let mut buf = u64::MAX.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0u8; 64]);
        assert_eq!(
            decode_public_values(&buf),
            Err(DecodeError::Malformed("reference length overflows"))
        );
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut buf = encode_public_values(b"ref", 5);
        buf.extend_from_slice(b"trailing junk");
        let pv = decode_public_values(&buf).unwrap();
        assert_eq!(pv.reference, b"ref");
        assert_eq!(pv.amount, 5);
    }

    #[test]
    fn amount_is_little_endian() {
        let buf = encode_public_values(&[0x00], 0x0102_0304_0506_0708);
        // Trailing 8 bytes, least significant first.
        assert_eq!(&buf[9..], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(
            decode_public_values(&buf).unwrap().amount,
            0x0102_0304_0506_0708
        );
    }

    proptest! {
        #[test]
        fn decode_never_panics(buf in proptest::collection::vec(any::<u8>(), 0..256)) {
            let _ = decode_public_values(&buf);
        }

        #[test]
        fn encode_decode_roundtrip(
            reference in proptest::collection::vec(any::<u8>(), 1..128),
            amount in any::<u64>(),
        ) {
            let buf = encode_public_values(&reference, amount);
            let pv = decode_public_values(&buf).unwrap();
            prop_assert_eq!(pv.reference, reference);
            prop_assert_eq!(pv.amount, amount);
        }
    }
}
