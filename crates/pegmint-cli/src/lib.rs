//! # pegmint-cli: Operator Tooling for the Pegmint Bridge
//!
//! Provides the `pegmint` command-line interface for working with the
//! bridge's binary formats without touching ledger state:
//!
//! - `pegmint decode`: decode a public-values payload.
//! - `pegmint encode`: build a public-values payload.
//! - `pegmint fingerprint`: compute the proof fingerprint of a mint attempt.
//! - `pegmint fixture`: generate a JSON mint-request fixture with a
//!   mock-bound proof, for end-to-end testing of embedders.

pub mod decode;
pub mod encode;
pub mod fingerprint;
pub mod fixture;
