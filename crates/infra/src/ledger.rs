//! Ledger service: account creation and id-addressed operations.
//!
//! The ledger composes an [`AccountRepository`] with the process-wide
//! [`IdSequence`]. It is the layer drivers talk to: every operation here takes
//! account ids rather than account references, so a caller's "current account"
//! is just an `AccountId` handle into the repository.
//!
//! ## Id assignment
//!
//! `create_account` draws the next id *before* validating its input. A rejected
//! creation still consumes an id, and ids are never handed out twice. Ids that
//! are already occupied in the repository (one handed to
//! [`Ledger::with_repository`] pre-populated) are skipped, so creation never
//! overwrites an existing account.
//!
//! ## Logging
//!
//! Events carry ids and amounts only. Credentials and presented secrets never
//! reach a log line.

use ledger_accounts::{Account, Credential};
use ledger_core::{AccountId, Decimal, IdSequence, LedgerError, LedgerResult};

use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Demo accounts seeded at startup: (display name, opening balance, credential).
pub const DEMO_ACCOUNTS: [(&str, i64, &str); 3] = [
    ("mizusako", 1000, "password"),
    ("tanaka", 1000, "password"),
    ("mike", 1000, "password"),
];

#[derive(Debug)]
pub struct Ledger<R = InMemoryAccountRepository> {
    repository: R,
    ids: IdSequence,
}

impl Ledger<InMemoryAccountRepository> {
    pub fn new() -> Self {
        Self::with_repository(InMemoryAccountRepository::new())
    }
}

impl Default for Ledger<InMemoryAccountRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Ledger<R>
where
    R: AccountRepository,
{
    pub fn with_repository(repository: R) -> Self {
        Self {
            repository,
            ids: IdSequence::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[cfg(test)]
    pub(crate) fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Number of ids consumed so far (successful or not).
    pub fn ids_issued(&self) -> u64 {
        self.ids.issued()
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.repository.get(id)
    }

    /// Open a new account under a freshly issued id and store it.
    pub fn create_account(
        &mut self,
        display_name: impl Into<String>,
        balance: Decimal,
        credential: impl Into<Credential>,
    ) -> LedgerResult<&Account> {
        let id = self.next_free_id();
        let account = match Account::open(id.clone(), display_name, balance, credential) {
            Ok(account) => account,
            Err(err) => {
                tracing::warn!(account_id = %id, error = %err, "account creation rejected");
                return Err(err);
            }
        };

        self.repository.save(account);
        tracing::info!(account_id = %id, %balance, "account created");

        self.repository
            .get(&id)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Create the built-in demo accounts and return their ids.
    pub fn seed_demo_accounts(&mut self) -> LedgerResult<Vec<AccountId>> {
        let mut seeded = Vec::with_capacity(DEMO_ACCOUNTS.len());
        for (name, balance, credential) in DEMO_ACCOUNTS {
            let account = self.create_account(name, Decimal::new(balance, 0), credential)?;
            seeded.push(account.id().clone());
        }
        tracing::debug!(count = seeded.len(), "demo accounts seeded");
        Ok(seeded)
    }

    /// Resolve `id` and check `presented` against its credential.
    pub fn sign_in(&self, id: &AccountId, presented: &str) -> LedgerResult<&Account> {
        let account = self.existing(id)?;
        if !account.authenticate(presented) {
            tracing::warn!(account_id = %id, "authentication failed");
            return Err(LedgerError::authentication_failed());
        }
        tracing::info!(account_id = %id, "signed in");
        Ok(account)
    }

    pub fn deposit(&mut self, id: &AccountId, amount: Decimal) -> LedgerResult<Decimal> {
        let balance = self.existing_mut(id)?.deposit(amount)?;
        tracing::debug!(account_id = %id, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    pub fn withdraw(&mut self, id: &AccountId, amount: Decimal) -> LedgerResult<Decimal> {
        let balance = self.existing_mut(id)?.withdraw(amount)?;
        tracing::debug!(account_id = %id, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    /// Move `amount` from `from` to `to`, returning the sender's new balance.
    ///
    /// - unknown sender: `NotFound`
    /// - `to == from` or unknown recipient: `InvalidTarget`
    ///
    /// The sender is detached from the repository while the entity transfer
    /// runs and is put back whatever the outcome.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> LedgerResult<Decimal> {
        if from == to {
            return Err(LedgerError::invalid_target(format!(
                "account {from} cannot transfer to itself"
            )));
        }

        let mut sender = self
            .repository
            .remove(from)
            .ok_or_else(|| LedgerError::not_found(from.clone()))?;

        let outcome = match self.repository.get_mut(to) {
            Some(recipient) => sender.transfer(recipient, amount),
            None => Err(LedgerError::invalid_target(format!(
                "recipient account {to} does not exist"
            ))),
        };
        self.repository.save(sender);

        match &outcome {
            Ok(balance) => {
                tracing::info!(from = %from, to = %to, %amount, %balance, "transfer completed")
            }
            Err(err) => {
                tracing::debug!(from = %from, to = %to, %amount, error = %err, "transfer rejected")
            }
        }
        outcome
    }

    /// Remove an account. Returns whether anything was removed; closing an
    /// unknown id is a no-op.
    pub fn close_account(&mut self, id: &AccountId) -> bool {
        let removed = self.repository.remove(id).is_some();
        if removed {
            tracing::info!(account_id = %id, "account closed");
        }
        removed
    }

    fn next_free_id(&mut self) -> AccountId {
        loop {
            let id = self.ids.next_id();
            if !self.repository.contains(&id) {
                return id;
            }
            tracing::warn!(account_id = %id, "id already occupied; skipping");
        }
    }

    fn existing(&self, id: &AccountId) -> LedgerResult<&Account> {
        self.repository
            .get(id)
            .ok_or_else(|| LedgerError::not_found(id.clone()))
    }

    fn existing_mut(&mut self, id: &AccountId) -> LedgerResult<&mut Account> {
        self.repository
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    #[test]
    fn create_account_issues_sequential_string_ids() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("alice", dec(10), "pa").unwrap().id().clone();
        let b = ledger.create_account("bob", dec(20), "pb").unwrap().id().clone();
        assert_eq!(a.as_str(), "0");
        assert_eq!(b.as_str(), "1");
        assert_eq!(ledger.repository().len(), 2);
    }

    #[test]
    fn rejected_creation_still_consumes_an_id() {
        let mut ledger = Ledger::new();
        let err = ledger.create_account("broke", dec(-1), "pw").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert!(ledger.repository().is_empty());
        assert_eq!(ledger.ids_issued(), 1);

        let next = ledger.create_account("ok", dec(0), "pw").unwrap();
        assert_eq!(next.id().as_str(), "1");
    }

    #[test]
    fn create_account_skips_ids_already_in_the_repository() {
        let mut repo = InMemoryAccountRepository::new();
        repo.save(Account::open(AccountId::from("0"), "existing", dec(42), "old").unwrap());
        let mut ledger = Ledger::with_repository(repo);

        let id = ledger.create_account("new", dec(1), "pw").unwrap().id().clone();
        assert_eq!(id.as_str(), "1");
        assert_eq!(ledger.ids_issued(), 2);

        let existing = ledger.sign_in(&AccountId::from("0"), "old").unwrap();
        assert_eq!(existing.display_name(), "existing");
        assert_eq!(existing.balance(), dec(42));
        assert_eq!(ledger.repository().len(), 2);
    }

    #[test]
    fn closed_ids_are_never_reissued() {
        let mut ledger = Ledger::new();
        let first = ledger.create_account("a", dec(1), "pw").unwrap().id().clone();
        assert!(ledger.close_account(&first));

        let second = ledger.create_account("b", dec(1), "pw").unwrap().id().clone();
        assert_ne!(first, second);
        assert!(ledger.account(&first).is_none());
    }

    #[test]
    fn close_account_twice_is_a_no_op() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("a", dec(1), "pw").unwrap().id().clone();
        assert!(ledger.close_account(&id));
        assert!(!ledger.close_account(&id));
        assert!(ledger.account(&id).is_none());
    }

    #[test]
    fn sign_in_distinguishes_unknown_id_and_bad_credential() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("a", dec(1), "secret").unwrap().id().clone();

        assert_eq!(ledger.sign_in(&id, "secret").unwrap().display_name(), "a");
        assert_eq!(
            ledger.sign_in(&id, "Secret").unwrap_err(),
            LedgerError::AuthenticationFailed
        );
        assert_eq!(
            ledger.sign_in(&AccountId::from("99"), "secret").unwrap_err(),
            LedgerError::NotFound(AccountId::from("99"))
        );
    }

    #[test]
    fn deposit_and_withdraw_by_id() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("a", dec(1000), "pw").unwrap().id().clone();

        assert_eq!(ledger.deposit(&id, dec(500)).unwrap(), dec(1500));
        assert_eq!(ledger.withdraw(&id, dec(1500)).unwrap(), Decimal::ZERO);
        assert!(matches!(
            ledger.withdraw(&id, dec(1)),
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert!(matches!(
            ledger.deposit(&AccountId::from("missing"), dec(1)),
            Err(LedgerError::NotFound(_))
        ));
    }

    #[test]
    fn transfer_by_id_updates_both_accounts() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("a", dec(1000), "pw").unwrap().id().clone();
        let b = ledger.create_account("b", dec(1000), "pw").unwrap().id().clone();

        assert_eq!(ledger.transfer(&a, &b, dec(300)).unwrap(), dec(700));
        assert_eq!(ledger.account(&a).unwrap().balance(), dec(700));
        assert_eq!(ledger.account(&b).unwrap().balance(), dec(1300));
    }

    #[test]
    fn transfer_to_self_is_rejected() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("a", dec(1000), "pw").unwrap().id().clone();

        let err = ledger.transfer(&a, &a, dec(1)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTarget(_)));
        assert_eq!(ledger.account(&a).unwrap().balance(), dec(1000));
    }

    #[test]
    fn transfer_to_unknown_recipient_keeps_sender_intact() {
        let mut ledger = Ledger::new();
        let a = ledger.create_account("a", dec(1000), "pw").unwrap().id().clone();

        let err = ledger.transfer(&a, &AccountId::from("404"), dec(10)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTarget(_)));

        let sender = ledger.account(&a).expect("sender must still be stored");
        assert_eq!(sender.balance(), dec(1000));
        assert_eq!(ledger.repository().len(), 1);
    }

    #[test]
    fn transfer_from_unknown_sender_is_not_found() {
        let mut ledger = Ledger::new();
        let b = ledger.create_account("b", dec(5), "pw").unwrap().id().clone();
        assert!(matches!(
            ledger.transfer(&AccountId::from("404"), &b, dec(1)),
            Err(LedgerError::NotFound(_))
        ));
        assert_eq!(ledger.account(&b).unwrap().balance(), dec(5));
    }

    #[test]
    fn seeds_three_demo_accounts() {
        let mut ledger = Ledger::new();
        let ids = ledger.seed_demo_accounts().unwrap();
        assert_eq!(ids.len(), 3);
        for id in &ids {
            let account = ledger.sign_in(id, "password").unwrap();
            assert_eq!(account.balance(), dec(1000));
        }
        assert_eq!(ledger.account(&ids[0]).unwrap().display_name(), "mizusako");
    }
}
