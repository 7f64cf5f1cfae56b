//! # Fungible-Token Collaborator
//!
//! The gateway's view of the token it mints into. Standard token
//! bookkeeping (balances, allowances, burn) is out of scope; the
//! orchestrator only needs `mint`, and assumes ordinary token semantics
//! behind it.
//!
//! [`InMemoryToken`] is the reference implementation used by tests and
//! the CLI fixture path. A production embedding would implement
//! [`FungibleToken`] over its real token backend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use pegmint_core::Recipient;
use thiserror::Error;

/// Error from the token collaborator.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The token backend refused the mint.
    #[error("token mint rejected: {0}")]
    MintRejected(String),

    /// A balance or the total supply would overflow.
    #[error("token balance overflow for {recipient}")]
    BalanceOverflow {
        /// Recipient whose balance would overflow.
        recipient: Recipient,
    },
}

/// Minting surface of the fungible token.
///
/// `mint` must be synchronous and must not call back into the gateway;
/// re-entrant mint attempts are rejected as guard violations.
pub trait FungibleToken: Send + Sync {
    /// Increase `to`'s balance and the total supply by `amount`.
    fn mint(&self, to: &Recipient, amount: u64) -> Result<(), TokenError>;

    /// Token symbol, surfaced in ledger info.
    fn symbol(&self) -> &str;
}

impl<T: FungibleToken + ?Sized> FungibleToken for Arc<T> {
    fn mint(&self, to: &Recipient, amount: u64) -> Result<(), TokenError> {
        (**self).mint(to, amount)
    }

    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

#[derive(Debug, Default)]
struct TokenBook {
    balances: HashMap<Recipient, u64>,
    total_supply: u64,
}

/// In-memory fungible token: balances map plus total supply.
#[derive(Debug)]
pub struct InMemoryToken {
    symbol: String,
    book: Mutex<TokenBook>,
}

impl InMemoryToken {
    /// Create an empty token with the given symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            book: Mutex::new(TokenBook::default()),
        }
    }

    /// Balance of one account.
    pub fn balance_of(&self, account: &Recipient) -> u64 {
        self.book.lock().balances.get(account).copied().unwrap_or(0)
    }

    /// Total minted supply.
    pub fn total_supply(&self) -> u64 {
        self.book.lock().total_supply
    }
}

impl FungibleToken for InMemoryToken {
    fn mint(&self, to: &Recipient, amount: u64) -> Result<(), TokenError> {
        let mut book = self.book.lock();
        let balance = book.balances.get(to).copied().unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow { recipient: *to })?;
        let new_supply = book
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow { recipient: *to })?;
        book.balances.insert(*to, new_balance);
        book.total_supply = new_supply;
        Ok(())
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Recipient {
        Recipient::from_bytes([byte; 20])
    }

    #[test]
    fn mint_increases_balance_and_supply() {
        let token = InMemoryToken::new("pBTC");
        token.mint(&account(1), 500).unwrap();
        token.mint(&account(2), 300).unwrap();
        token.mint(&account(1), 200).unwrap();
        assert_eq!(token.balance_of(&account(1)), 700);
        assert_eq!(token.balance_of(&account(2)), 300);
        assert_eq!(token.total_supply(), 1000);
        assert_eq!(token.symbol(), "pBTC");
    }

    #[test]
    fn unknown_account_has_zero_balance() {
        let token = InMemoryToken::new("pBTC");
        assert_eq!(token.balance_of(&account(9)), 0);
    }

    #[test]
    fn balance_overflow_is_rejected() {
        let token = InMemoryToken::new("pBTC");
        token.mint(&account(1), u64::MAX).unwrap();
        let err = token.mint(&account(1), 1).unwrap_err();
        assert_eq!(
            err,
            TokenError::BalanceOverflow {
                recipient: account(1)
            }
        );
        // Nothing partially applied.
        assert_eq!(token.balance_of(&account(1)), u64::MAX);
        assert_eq!(token.total_supply(), u64::MAX);
    }

    #[test]
    fn arc_delegation() {
        let token = Arc::new(InMemoryToken::new("pBTC"));
        FungibleToken::mint(&token, &account(3), 42).unwrap();
        assert_eq!(token.balance_of(&account(3)), 42);
    }
}
