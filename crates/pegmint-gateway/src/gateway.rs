//! # Mint Gateway
//!
//! The sole state-changing entry point of the bridge. Each call runs the
//! full gate sequence and either applies the mint atomically or rejects
//! with a distinguishable [`MintError`], leaving the registry and ledger
//! byte-for-byte unchanged.
//!
//! ## Critical Section
//!
//! Registry, ledger, and audit log live in one `Mutex`-guarded state
//! struct. The lock is held from the cap check through the token mint,
//! so no two calls can interleave their check-and-apply phases. Nothing
//! inside the section blocks: the verifier is required to be synchronous
//! and side-effect-free.
//!
//! ## Reentrancy
//!
//! A re-entrant `mint` from within an in-flight call (e.g. triggered by
//! the token collaborator) would deadlock on the state mutex; and, on a
//! re-entrant lock, would observe pre-mutation ledger state and
//! double-spend the cap. A thread-local set of in-flight gateway
//! instances turns that into an explicit [`MintError::ReentrantCall`]
//! rejection before the lock is touched. The marker is per instance, so
//! a mint on an unrelated gateway from inside another gateway's call is
//! not a violation. Calls from other threads are unaffected; they
//! serialize on the mutex as usual.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::Utc;
use parking_lot::Mutex;
use pegmint_core::{
    decode_public_values, ProgramKey, ProofFingerprint, Recipient, SourceTxId,
};
use pegmint_ledger::issuance::DEFAULT_CAP;
use pegmint_ledger::{FingerprintRegistry, IssuanceLedger, LedgerError, RegistryError};
use pegmint_verify::ProofVerifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::receipt::{LedgerInfo, MintReceipt};
use crate::token::{FungibleToken, TokenError};

/// Rejection taxonomy of the mint path. Every rejection is synchronous
/// and leaves persistent state untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MintError {
    /// The recipient is the zero address.
    #[error("invalid recipient: zero address")]
    InvalidRecipient,

    /// The source-transaction id is the zero sentinel.
    #[error("invalid source transaction id: zero sentinel")]
    InvalidSourceTx,

    /// The decoded amount is zero, or the public values were malformed
    /// (malformed payloads are indistinguishable from zero-amount ones
    /// on this path, by design).
    #[error("zero mint amount")]
    ZeroAmount,

    /// The mint would push total issuance past the hard cap.
    #[error("cap exceeded: requested {requested}, issued {total_issued} of cap {cap}")]
    CapExceeded {
        /// Amount the rejected mint requested.
        requested: u64,
        /// Total issued before the rejected mint.
        total_issued: u64,
        /// The hard supply cap.
        cap: u64,
    },

    /// The proof fingerprint was already used by an earlier mint.
    #[error("proof fingerprint already used: {0}")]
    AlreadyUsed(ProofFingerprint),

    /// The external verifier rejected the proof (or failed; failures are
    /// treated as rejections).
    #[error("invalid proof")]
    InvalidProof,

    /// `mint` was invoked from within an in-flight mint on the same
    /// thread, a guard violation, not a transient condition.
    #[error("re-entrant mint call")]
    ReentrantCall,

    /// The token collaborator refused the mint.
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl From<LedgerError> for MintError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::CapExceeded {
                requested,
                total_issued,
                cap,
            } => Self::CapExceeded {
                requested,
                total_issued,
                cap,
            },
        }
    }
}

impl From<RegistryError> for MintError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyUsed(fp) => Self::AlreadyUsed(fp),
        }
    }
}

/// One mint attempt. Transient: constructed per call and consumed by
/// [`MintGateway::mint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    /// Account to credit.
    pub recipient: Recipient,
    /// Source-chain transaction the proof attests to.
    pub source_tx_id: SourceTxId,
    /// Raw public output bytes of the proving program.
    #[serde(with = "pegmint_core::hex::serde_hex")]
    pub public_values: Vec<u8>,
    /// Raw proof bytes.
    #[serde(with = "pegmint_core::hex::serde_hex")]
    pub proof_bytes: Vec<u8>,
}

/// Gateway configuration: the supply cap and the proving program's
/// verifying key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintGatewayConfig {
    /// Hard supply cap, in base units.
    pub cap: u64,
    /// Verifying key of the proving program.
    pub program_key: ProgramKey,
}

impl Default for MintGatewayConfig {
    /// Bitcoin-style defaults: 21 million coins at 10^8 base units, zero
    /// program key (to be replaced when a real verifier is wired).
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            program_key: ProgramKey::zero(),
        }
    }
}

thread_local! {
    // Addresses of the gateways with a mint in flight on this thread.
    // The guard removes its entry before `mint` returns, so an entry can
    // never outlive its gateway.
    static MINTS_IN_FLIGHT: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());
}

/// Clears the in-flight marker when the mint call unwinds, success or not.
struct InFlightGuard {
    gateway: usize,
}

impl InFlightGuard {
    fn enter(gateway: usize) -> Result<Self, MintError> {
        MINTS_IN_FLIGHT.with(|set| {
            if !set.borrow_mut().insert(gateway) {
                return Err(MintError::ReentrantCall);
            }
            Ok(Self { gateway })
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        MINTS_IN_FLIGHT.with(|set| {
            set.borrow_mut().remove(&self.gateway);
        });
    }
}

/// Mutable state behind the gateway's critical section.
#[derive(Debug)]
struct GatewayState {
    registry: FingerprintRegistry,
    ledger: IssuanceLedger,
    audit: Vec<MintReceipt>,
}

/// Proof-gated mint orchestrator.
///
/// Owns the registry, ledger, and audit log (constructor-injected, no
/// globals); delegates proof verdicts to `V` and token bookkeeping to
/// `T`. Cheap to share behind an `Arc`; all methods take `&self`.
pub struct MintGateway<V, T> {
    program_key: ProgramKey,
    verifier: V,
    token: T,
    state: Mutex<GatewayState>,
}

impl<V: ProofVerifier, T: FungibleToken> MintGateway<V, T> {
    /// Create a gateway at genesis: empty registry, zeroed ledger.
    pub fn new(config: MintGatewayConfig, verifier: V, token: T) -> Self {
        Self {
            program_key: config.program_key,
            verifier,
            token,
            state: Mutex::new(GatewayState {
                registry: FingerprintRegistry::new(),
                ledger: IssuanceLedger::new(config.cap),
                audit: Vec::new(),
            }),
        }
    }

    /// Process one mint attempt.
    ///
    /// Gate order: recipient → source tx → amount → cap → fingerprint →
    /// proof. All persistent mutations (fingerprint mark, ledger
    /// increment, token mint, audit append) happen strictly after the
    /// last gate, under one critical section.
    pub fn mint(&self, request: MintRequest) -> Result<MintReceipt, MintError> {
        let _guard = InFlightGuard::enter(self as *const Self as usize).map_err(|err| {
            tracing::warn!("re-entrant mint call rejected");
            err
        })?;

        // Received: structural gates, no state needed.
        if request.recipient.is_zero() {
            tracing::warn!("mint rejected: zero recipient");
            return Err(MintError::InvalidRecipient);
        }
        if request.source_tx_id.is_zero() {
            tracing::warn!("mint rejected: zero source tx id");
            return Err(MintError::InvalidSourceTx);
        }

        // Validated: a malformed payload decodes to amount 0 and takes
        // the same rejection as a genuine zero-amount payload.
        let amount = decode_public_values(&request.public_values)
            .map(|pv| pv.amount)
            .unwrap_or(0);
        if amount == 0 {
            tracing::warn!(source_tx = %request.source_tx_id, "mint rejected: zero amount");
            return Err(MintError::ZeroAmount);
        }

        // Critical section: held through the token mint.
        let mut state = self.state.lock();

        // CapChecked: headroom probe, nothing applied yet.
        state.ledger.check(amount).map_err(|err| {
            tracing::warn!(amount, "mint rejected: {err}");
            MintError::from(err)
        })?;

        // FingerprintChecked: membership gate, mark deferred to apply.
        let fingerprint = ProofFingerprint::compute(
            &request.source_tx_id,
            &request.public_values,
            &request.proof_bytes,
        );
        state.registry.check(&fingerprint).map_err(|err| {
            tracing::warn!(%fingerprint, "mint rejected: replay");
            MintError::from(err)
        })?;

        // ProofChecked: verifier errors count as invalid proofs.
        let verdict = match self.verifier.verify(
            &self.program_key,
            &request.public_values,
            &request.proof_bytes,
        ) {
            Ok(verdict) => verdict,
            Err(err) => {
                tracing::warn!(%fingerprint, "verifier error treated as invalid proof: {err}");
                false
            }
        };
        if !verdict {
            tracing::warn!(%fingerprint, "mint rejected: invalid proof");
            return Err(MintError::InvalidProof);
        }

        // Applied: the token collaborator goes first: it is the only
        // fallible step left, and a refusal must leave the registry and
        // ledger untouched (a marked fingerprint can never be unmarked).
        self.token.mint(&request.recipient, amount)?;
        state.registry.check_and_mark(fingerprint)?;
        state.ledger.apply(request.source_tx_id, amount)?;

        let receipt = MintReceipt {
            recipient: request.recipient,
            amount,
            source_tx_id: request.source_tx_id,
            fingerprint,
            minted_at: Utc::now(),
        };
        state.audit.push(receipt.clone());

        tracing::info!(
            recipient = %receipt.recipient,
            amount,
            source_tx = %receipt.source_tx_id,
            fingerprint = %fingerprint,
            total_issued = state.ledger.total_issued(),
            "mint applied"
        );

        Ok(receipt)
    }

    /// True if a fingerprint has been consumed by a successful mint.
    pub fn is_fingerprint_used(&self, fingerprint: &ProofFingerprint) -> bool {
        self.state.lock().registry.is_used(fingerprint)
    }

    /// Cumulative amount issued against one source transaction.
    pub fn issued_for(&self, source_tx_id: &SourceTxId) -> u64 {
        self.state.lock().ledger.issued_for(source_tx_id)
    }

    /// Total amount issued so far.
    pub fn total_issued(&self) -> u64 {
        self.state.lock().ledger.total_issued()
    }

    /// Snapshot of configuration and counters.
    pub fn ledger_info(&self) -> LedgerInfo {
        let state = self.state.lock();
        LedgerInfo {
            total_issued: state.ledger.total_issued(),
            cap: state.ledger.cap(),
            token: self.token.symbol().to_string(),
            verifier: self.verifier.name().to_string(),
            program_key: self.program_key,
        }
    }

    /// All mint receipts, oldest first.
    pub fn audit_log(&self) -> Vec<MintReceipt> {
        self.state.lock().audit.clone()
    }

    /// The token collaborator.
    pub fn token(&self) -> &T {
        &self.token
    }
}
