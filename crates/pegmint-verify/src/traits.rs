//! # Verifier Trait
//!
//! Abstract interface for external proof verification. All
//! implementations (the accept-all placeholder, deterministic mocks,
//! real SNARK verifiers) must satisfy this trait.
//!
//! The trait requires `Send + Sync`: the gateway calls `verify()` inside
//! its critical section and may be shared across threads. Verification
//! must be synchronous and side-effect-free; the mint path performs no
//! blocking I/O while holding the ledger lock.

use pegmint_core::ProgramKey;
use thiserror::Error;

/// Error during proof verification.
///
/// The mint orchestrator does not distinguish verifier errors from
/// negative verdicts; both reject the mint as an invalid proof. The
/// structured variants exist for logging and for direct callers.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proof bytes are structurally malformed.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The verifying key does not match the proving program.
    #[error("program key mismatch: {0}")]
    KeyMismatch(String),

    /// Internal verifier failure.
    #[error("verifier failure: {0}")]
    Internal(String),
}

/// Abstract interface for a proof verifier.
///
/// `verify` returns `Ok(true)` when the proof attests that the given
/// program committed exactly `public_values`, `Ok(false)` for a
/// well-formed but invalid proof, and `Err` for anything else.
pub trait ProofVerifier: Send + Sync {
    /// Verify a proof against the program key and its claimed public values.
    fn verify(
        &self,
        program_key: &ProgramKey,
        public_values: &[u8],
        proof_bytes: &[u8],
    ) -> Result<bool, VerifyError>;

    /// Human-readable verifier identifier, surfaced in ledger info.
    fn name(&self) -> &'static str;
}
