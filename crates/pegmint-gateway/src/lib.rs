//! # pegmint-gateway: The Mint Orchestrator
//!
//! Composes the public-values decoder, the fingerprint registry, the
//! issuance ledger, the external proof verifier, and the fungible-token
//! collaborator into a single validated state transition:
//!
//! ```text
//! Received → Validated → CapChecked → FingerprintChecked → ProofChecked → Applied
//!                                                                   ↘ Rejected(MintError)
//! ```
//!
//! - **Gateway** ([`gateway`]): [`MintGateway`], the sole state-changing
//!   entry point, its configuration, and the [`MintError`] rejection
//!   taxonomy. One mutex-guarded critical section per mint; re-entrant
//!   invocation is a guard violation.
//!
//! - **Token** ([`token`]): the [`FungibleToken`] collaborator trait and
//!   the [`InMemoryToken`] reference implementation.
//!
//! - **Receipts** ([`receipt`]): [`MintReceipt`] audit records and the
//!   [`LedgerInfo`] query snapshot.

pub mod gateway;
pub mod receipt;
pub mod token;

pub use gateway::{MintError, MintGateway, MintGatewayConfig, MintRequest};
pub use receipt::{LedgerInfo, MintReceipt};
pub use token::{FungibleToken, InMemoryToken, TokenError};
