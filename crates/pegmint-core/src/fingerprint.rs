//! # Proof Fingerprints
//!
//! A [`ProofFingerprint`] is the content hash identifying one mint
//! attempt: `SHA256(source_tx_id || public_values || proof_bytes)`.
//! The concatenation order is fixed; it is part of the replay-protection
//! domain, and reordering the inputs would change which attempts collide.
//!
//! The fingerprint is what the registry stores. Two requests with any
//! byte-level difference in txid, public values, or proof bytes produce
//! distinct fingerprints and are deduplicated independently.

use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::hex;
use crate::identity::{IdentityError, SourceTxId};

/// Content hash uniquely identifying one mint attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProofFingerprint([u8; 32]);

impl ProofFingerprint {
    /// Compute the fingerprint for a mint attempt.
    ///
    /// Hashes the ordered concatenation
    /// `source_tx_id || public_values || proof_bytes`.
    pub fn compute(source_tx_id: &SourceTxId, public_values: &[u8], proof_bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(source_tx_id.as_bytes());
        hasher.update(public_values);
        hasher.update(proof_bytes);
        Self(hasher.finalize().into())
    }

    /// Construct from raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string (optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self, IdentityError> {
        Ok(Self(hex::decode_fixed::<32>(s)?))
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl std::fmt::Display for ProofFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ProofFingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProofFingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
