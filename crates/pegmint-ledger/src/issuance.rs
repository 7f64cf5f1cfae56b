//! # Issuance Ledger
//!
//! Tracks cumulative issued amounts under a hard supply cap: one global
//! counter and one counter per source transaction. Both counters are
//! monotone; nothing in this module ever decrements or deletes.
//!
//! `check` is the non-mutating headroom probe used by the orchestrator's
//! cap gate; `apply` performs the check again and then increments both
//! counters, so the check-then-apply pair is a single atomic step from
//! the caller's perspective (a failed `apply` mutates nothing).
//!
//! All arithmetic is checked. With a cap at or below `u64::MAX` the
//! global counter cannot overflow (it never exceeds the cap), and the
//! per-transaction counters are bounded by the global one, but the code
//! does not rely on that reasoning; a wraparound anywhere is a bug, not
//! a silent mint.

use std::collections::HashMap;

use pegmint_core::SourceTxId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap of the reference deployment: 21 million coins at 10^8 base
/// units each.
pub const DEFAULT_CAP: u64 = 21_000_000 * 100_000_000;

/// Error from the issuance ledger.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Applying the amount would push `total_issued` past the cap.
    #[error("cap exceeded: requested {requested}, issued {total_issued} of cap {cap}")]
    CapExceeded {
        /// Amount the rejected mint requested.
        requested: u64,
        /// Total issued before the rejected mint.
        total_issued: u64,
        /// The hard supply cap.
        cap: u64,
    },
}

/// Capped, monotone issued-amount counters.
///
/// The fields are private and every mutation goes through [`apply`], so
/// `total_issued <= cap` and `sum(per_source_tx) == total_issued` hold
/// for every reachable value. Deserialization re-validates both rather
/// than trusting the input.
///
/// [`apply`]: IssuanceLedger::apply
#[derive(Debug, Clone, Serialize)]
pub struct IssuanceLedger {
    cap: u64,
    total_issued: u64,
    per_source_tx: HashMap<SourceTxId, u64>,
}

impl<'de> Deserialize<'de> for IssuanceLedger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            cap: u64,
            total_issued: u64,
            per_source_tx: HashMap<SourceTxId, u64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.total_issued > raw.cap {
            return Err(serde::de::Error::custom(format!(
                "total_issued {} exceeds cap {}",
                raw.total_issued, raw.cap
            )));
        }
        let per_tx_sum = raw
            .per_source_tx
            .values()
            .try_fold(0u64, |acc, v| acc.checked_add(*v));
        if per_tx_sum != Some(raw.total_issued) {
            return Err(serde::de::Error::custom(
                "per-source-tx counters do not sum to total_issued",
            ));
        }
        Ok(Self {
            cap: raw.cap,
            total_issued: raw.total_issued,
            per_source_tx: raw.per_source_tx,
        })
    }
}

impl IssuanceLedger {
    /// Create an empty ledger with the given cap, the genesis state.
    pub fn new(cap: u64) -> Self {
        Self {
            cap,
            total_issued: 0,
            per_source_tx: HashMap::new(),
        }
    }

    /// Non-mutating headroom probe: fail if applying `amount` would
    /// exceed the cap.
    pub fn check(&self, amount: u64) -> Result<(), LedgerError> {
        match self.total_issued.checked_add(amount) {
            Some(next) if next <= self.cap => Ok(()),
            _ => Err(LedgerError::CapExceeded {
                requested: amount,
                total_issued: self.total_issued,
                cap: self.cap,
            }),
        }
    }

    /// Apply an issuance: increment the global counter and the counter
    /// for `source_tx_id`. On failure nothing is mutated.
    pub fn apply(&mut self, source_tx_id: SourceTxId, amount: u64) -> Result<(), LedgerError> {
        self.check(amount)?;
        // check() guarantees total_issued + amount <= cap <= u64::MAX,
        // and the per-tx counter is bounded by total_issued.
        self.total_issued += amount;
        *self.per_source_tx.entry(source_tx_id).or_insert(0) += amount;
        Ok(())
    }

    /// Total amount issued so far.
    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    /// The hard supply cap.
    pub fn cap(&self) -> u64 {
        self.cap
    }

    /// Remaining headroom under the cap.
    pub fn remaining(&self) -> u64 {
        self.cap.saturating_sub(self.total_issued)
    }

    /// Cumulative amount issued against one source transaction.
    pub fn issued_for(&self, source_tx_id: &SourceTxId) -> u64 {
        self.per_source_tx.get(source_tx_id).copied().unwrap_or(0)
    }
}

impl Default for IssuanceLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CAP)
    }
}
