//! # Mint Receipts and Ledger Info
//!
//! Record types emitted by the gateway: the per-mint audit record and the
//! point-in-time ledger snapshot returned by the info query.

use chrono::{DateTime, Utc};
use pegmint_core::{ProgramKey, ProofFingerprint, Recipient, SourceTxId};
use serde::{Deserialize, Serialize};

/// Audit record of one successful mint.
///
/// Appended to the gateway's audit log and returned to the caller. The
/// fingerprint ties the receipt back to the exact proof that authorized
/// the issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Account credited with the minted amount.
    pub recipient: Recipient,
    /// Amount minted, in base units.
    pub amount: u64,
    /// Source-chain transaction the proof attests to.
    pub source_tx_id: SourceTxId,
    /// Fingerprint of the authorizing proof.
    pub fingerprint: ProofFingerprint,
    /// When the mint was applied.
    pub minted_at: DateTime<Utc>,
}

/// Point-in-time snapshot of the gateway's configuration and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerInfo {
    /// Total amount issued so far.
    pub total_issued: u64,
    /// Hard supply cap.
    pub cap: u64,
    /// Symbol of the token collaborator.
    pub token: String,
    /// Name of the proof verifier in use.
    pub verifier: String,
    /// Verifying key of the proving program.
    pub program_key: ProgramKey,
}
