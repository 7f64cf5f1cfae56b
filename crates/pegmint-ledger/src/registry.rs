//! # Fingerprint Registry
//!
//! Append-only, content-addressed dedup store for proof fingerprints.
//! Each fingerprint identifies one mint attempt; once marked used it can
//! never be presented again.
//!
//! The registry computes no hashing itself; fingerprints arrive
//! pre-computed from the orchestrator with the fixed
//! `source_tx_id || public_values || proof_bytes` domain.
//!
//! The gate/mark split matters for atomicity of the mint as a whole:
//! [`FingerprintRegistry::check`] is the non-mutating validation gate,
//! and [`FingerprintRegistry::check_and_mark`] is the single set-insert
//! performed in the apply step after every gate has passed. Both run
//! under the orchestrator's critical section, so two calls presenting
//! the same fingerprint can never both observe "not yet used".

use std::collections::HashSet;

use pegmint_core::ProofFingerprint;
use thiserror::Error;

/// Error from the fingerprint registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The fingerprint was already marked used by an earlier mint.
    #[error("proof fingerprint already used: {0}")]
    AlreadyUsed(ProofFingerprint),
}

/// At-most-once dedup store for proof fingerprints.
#[derive(Debug, Default)]
pub struct FingerprintRegistry {
    used: HashSet<ProofFingerprint>,
}

impl FingerprintRegistry {
    /// Create an empty registry, the genesis state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-mutating gate: fail if the fingerprint is already used.
    pub fn check(&self, fingerprint: &ProofFingerprint) -> Result<(), RegistryError> {
        if self.used.contains(fingerprint) {
            return Err(RegistryError::AlreadyUsed(*fingerprint));
        }
        Ok(())
    }

    /// Atomically check and mark a fingerprint used.
    ///
    /// A single set-insert: succeeds exactly once per distinct
    /// fingerprint, fails with [`RegistryError::AlreadyUsed`] afterwards.
    pub fn check_and_mark(&mut self, fingerprint: ProofFingerprint) -> Result<(), RegistryError> {
        if !self.used.insert(fingerprint) {
            return Err(RegistryError::AlreadyUsed(fingerprint));
        }
        Ok(())
    }

    /// True if the fingerprint has been marked used.
    pub fn is_used(&self, fingerprint: &ProofFingerprint) -> bool {
        self.used.contains(fingerprint)
    }

    /// Number of fingerprints marked used.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True if no fingerprint has ever been marked.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
