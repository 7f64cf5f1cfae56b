//! # pegmint-verify: Proof Verification Interface
//!
//! The mint ledger treats proof validity as an opaque external verdict.
//! This crate defines the boundary:
//!
//! - [`ProofVerifier`] (`traits`): the abstract verifier interface. The
//!   ledger never inspects proof bytes itself; it asks a verifier and
//!   acts on the boolean verdict.
//!
//! - [`AcceptAllVerifier`] (`mock`): the deployment placeholder that
//!   accepts every proof, matching the reference deployment where the
//!   real verifier is not yet wired up.
//!
//! - [`MockVerifier`] (`mock`): a deterministic SHA-256-bound verifier
//!   for tests that need a rejecting path.
//!
//! Swapping in a real verifier (Groth16, PLONK, a zkVM receipt check)
//! means implementing [`ProofVerifier`], with no ledger code changes.

pub mod mock;
pub mod traits;

pub use mock::{AcceptAllVerifier, MockVerifier};
pub use traits::{ProofVerifier, VerifyError};
