//! # Placeholder and Mock Verifiers
//!
//! Two [`ProofVerifier`] implementations that stand in for a real proof
//! system:
//!
//! - [`AcceptAllVerifier`] reproduces the reference deployment, where the
//!   on-chain verifier is not yet wired and every proof is accepted. It is
//!   a deliberate placeholder, kept as a named type so its presence is
//!   visible at construction sites.
//!
//! - [`MockVerifier`] is deterministic and transparent: a proof is valid
//!   iff it equals `SHA256(program_key || public_values)`. It provides no
//!   zero-knowledge guarantees (anyone can forge a "proof" from public
//!   data), but it gives tests a real rejecting path.
//!
//! ## Security Warning
//!
//! Neither implementation verifies anything cryptographically. **Do not
//! deploy either against real funds.**

use pegmint_core::ProgramKey;
use sha2::{Digest, Sha256};

use crate::traits::{ProofVerifier, VerifyError};

/// Accepts every proof unconditionally.
///
/// Matches the reference deployment's not-yet-wired verifier. Named so
/// that `MintGateway::new(.., AcceptAllVerifier, ..)` reads as the
/// placeholder it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllVerifier;

impl ProofVerifier for AcceptAllVerifier {
    fn verify(
        &self,
        _program_key: &ProgramKey,
        _public_values: &[u8],
        _proof_bytes: &[u8],
    ) -> Result<bool, VerifyError> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "accept-all"
    }
}

/// Deterministic hash-bound verifier for tests.
///
/// A proof is valid iff `proof_bytes == SHA256(program_key || public_values)`.
/// Use [`MockVerifier::prove`] to produce a matching proof.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl MockVerifier {
    /// Produce the unique proof accepted for these inputs.
    pub fn prove(program_key: &ProgramKey, public_values: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(program_key.as_bytes());
        hasher.update(public_values);
        hasher.finalize().to_vec()
    }
}

impl ProofVerifier for MockVerifier {
    fn verify(
        &self,
        program_key: &ProgramKey,
        public_values: &[u8],
        proof_bytes: &[u8],
    ) -> Result<bool, VerifyError> {
        if proof_bytes.len() != 32 {
            return Err(VerifyError::MalformedProof(format!(
                "expected 32 proof bytes, got {}",
                proof_bytes.len()
            )));
        }
        Ok(proof_bytes == Self::prove(program_key, public_values).as_slice())
    }

    fn name(&self) -> &'static str {
        "mock-sha256"
    }
}
