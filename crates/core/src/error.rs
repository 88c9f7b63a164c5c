//! Ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is an expected, recoverable outcome reported to the immediate
/// caller. A failed operation leaves all account state exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A withdraw or transfer asked for more than the account holds.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// An amount was non-numeric, negative, non-finite, or out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A transfer targeted the sending account itself or an unknown account.
    #[error("invalid transfer target: {0}")]
    InvalidTarget(String),

    /// The acting account does not exist.
    #[error("account {0} not found")]
    NotFound(AccountId),

    /// The presented credential did not match.
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl LedgerError {
    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }

    pub fn not_found(id: AccountId) -> Self {
        Self::NotFound(id)
    }

    pub fn authentication_failed() -> Self {
        Self::AuthenticationFailed
    }
}
