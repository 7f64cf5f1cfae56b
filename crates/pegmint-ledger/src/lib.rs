//! # pegmint-ledger: Mint-Side Persistent State
//!
//! The two stateful components behind the mint orchestrator:
//!
//! - **Fingerprint Registry** ([`registry`]): an append-only set of proof
//!   fingerprints. A fingerprint transitions unused→used at most once and
//!   never reverts; this is the replay-protection store.
//!
//! - **Issuance Ledger** ([`issuance`]): the capped issued-amount
//!   counters, global and per source transaction. `total_issued` can
//!   never exceed the cap, and both counters are monotone.
//!
//! Neither component locks internally. Atomicity is the orchestrator's
//! job: both live inside the gateway's single critical section, and the
//! `&mut self` mutators make any unguarded concurrent use a compile
//! error rather than a race.

pub mod issuance;
pub mod registry;

pub use issuance::{IssuanceLedger, LedgerError};
pub use registry::{FingerprintRegistry, RegistryError};
