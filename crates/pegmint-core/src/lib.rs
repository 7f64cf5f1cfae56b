//! # pegmint-core: Foundational Types for the Pegmint Bridge
//!
//! Leaf crate with no internal dependencies. Provides:
//!
//! - **Identity newtypes** ([`identity`]): [`Recipient`], [`SourceTxId`],
//!   and [`ProgramKey`]: fixed-width identifiers with zero-sentinel
//!   detection and validating hex serde.
//!
//! - **Public-values codec** ([`public_values`]): the length-prefixed
//!   binary record committed by the proving program. Decoding is total
//!   and overflow-checked; the input is attacker-controlled.
//!
//! - **Proof fingerprints** ([`fingerprint`]): SHA-256 content hash over
//!   `source_tx_id || public_values || proof_bytes`, the replay-protection
//!   key for the mint ledger.
//!
//! - **Hex helpers** ([`hex`]): lowercase hex encoding/decoding without
//!   an external crate dependency.

pub mod fingerprint;
pub mod hex;
pub mod identity;
pub mod public_values;

pub use fingerprint::ProofFingerprint;
pub use hex::HexError;
pub use identity::{IdentityError, ProgramKey, Recipient, SourceTxId};
pub use public_values::{decode_public_values, encode_public_values, DecodeError, PublicValues};
