use std::collections::HashMap;

use ledger_accounts::Account;
use ledger_core::AccountId;

use super::r#trait::AccountRepository;

/// In-memory account repository backed by a `HashMap`.
///
/// Nothing is persisted; the accounts live as long as the repository.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn save(&mut self, account: Account) {
        self.accounts.insert(account.id().clone(), account);
    }

    fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    fn get_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    fn remove(&mut self, id: &AccountId) -> Option<Account> {
        self.accounts.remove(id)
    }

    fn ids(&self) -> Vec<AccountId> {
        let mut ids: Vec<AccountId> = self.accounts.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
