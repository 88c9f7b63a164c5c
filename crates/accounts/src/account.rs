use serde::Serialize;

use ledger_core::{AccountId, Amount, Decimal, Entity, LedgerError, LedgerResult};

use crate::credential::Credential;

/// A personal account: identity, display name, balance and credential.
///
/// # Invariants
/// - `balance >= 0` after every operation, including in the middle of a transfer
///   as seen by any caller.
/// - The credential is never returned; only [`Account::authenticate`] consults it.
/// - Fields change only through the operations below.
///
/// `Account` is intentionally not `Clone`: the repository holding it is the one
/// authoritative instance, and everybody else refers to it by [`AccountId`].
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    display_name: String,
    balance: Decimal,
    credential: Credential,
}

impl Account {
    /// Open an account under an externally issued id.
    ///
    /// Fails with `InvalidAmount` if the opening balance is negative.
    pub fn open(
        id: AccountId,
        display_name: impl Into<String>,
        balance: Decimal,
        credential: impl Into<Credential>,
    ) -> LedgerResult<Self> {
        let balance = Amount::new(balance)?;
        Ok(Self {
            id,
            display_name: display_name.into(),
            balance: balance.value(),
            credential: credential.into(),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            balance: self.balance,
        }
    }

    /// True iff `presented` is exactly the credential given at opening.
    pub fn authenticate(&self, presented: &str) -> bool {
        self.credential.verify(presented)
    }

    /// Add `amount` to the balance and return the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> LedgerResult<Decimal> {
        let amount = Amount::new(amount)?;
        self.balance = self.credited(amount)?;
        Ok(self.balance)
    }

    /// Take `amount` out of the balance and return the new balance.
    ///
    /// Withdrawing the whole balance is allowed; anything more is
    /// `InsufficientBalance`.
    pub fn withdraw(&mut self, amount: Decimal) -> LedgerResult<Decimal> {
        let amount = Amount::new(amount)?;
        self.balance = self.debited(amount)?;
        Ok(self.balance)
    }

    /// Move `amount` from this account to `to`, returning this account's new
    /// balance.
    ///
    /// Both new balances are computed before either account is touched, so on
    /// any error neither balance changes.
    pub fn transfer(&mut self, to: &mut Account, amount: Decimal) -> LedgerResult<Decimal> {
        if self.is_same_entity(to) {
            return Err(LedgerError::invalid_target(format!(
                "account {} cannot transfer to itself",
                self.id
            )));
        }
        let amount = Amount::new(amount)?;

        let sender_balance = self.debited(amount)?;
        let recipient_balance = to.credited(amount)?;

        self.balance = sender_balance;
        to.balance = recipient_balance;
        Ok(self.balance)
    }

    fn debited(&self, amount: Amount) -> LedgerResult<Decimal> {
        let amount = amount.value();
        if amount > self.balance {
            return Err(LedgerError::insufficient_balance(amount, self.balance));
        }
        Ok(self.balance - amount)
    }

    fn credited(&self, amount: Amount) -> LedgerResult<Decimal> {
        self.balance.checked_add(amount.value()).ok_or_else(|| {
            LedgerError::invalid_amount(format!(
                "crediting {amount} to account {} overflows the balance",
                self.id
            ))
        })
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only view of an account, safe to display or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub display_name: String,
    pub balance: Decimal,
}
