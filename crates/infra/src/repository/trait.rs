use ledger_accounts::Account;
use ledger_core::AccountId;

/// Keyed collection of accounts.
///
/// ## Ownership
///
/// Implementations hold the authoritative `Account` instances. A mutation made
/// through [`AccountRepository::get_mut`] is what every later
/// [`AccountRepository::get`] observes; there is no separate "save after edit"
/// step.
///
/// ## Concurrency
///
/// Receivers are `&mut self` for writes and the trait makes no thread-safety
/// promises. Hosts that share a repository across threads must put it behind a
/// mutex.
pub trait AccountRepository {
    /// Insert `account` under its id, replacing any account already stored
    /// there (last write wins).
    fn save(&mut self, account: Account);

    /// Look up an account. Absence is a normal outcome, not an error.
    fn get(&self, id: &AccountId) -> Option<&Account>;

    fn get_mut(&mut self, id: &AccountId) -> Option<&mut Account>;

    /// Detach and return the account stored under `id`, if any.
    fn remove(&mut self, id: &AccountId) -> Option<Account>;

    /// All stored ids, in ascending order.
    fn ids(&self) -> Vec<AccountId>;

    fn len(&self) -> usize;

    /// Delete the account stored under `id`. Deleting an unknown id is a no-op.
    fn delete(&mut self, id: &AccountId) {
        let _ = self.remove(id);
    }

    fn contains(&self, id: &AccountId) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> AccountRepository for Box<R>
where
    R: AccountRepository + ?Sized,
{
    fn save(&mut self, account: Account) {
        (**self).save(account)
    }

    fn get(&self, id: &AccountId) -> Option<&Account> {
        (**self).get(id)
    }

    fn get_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        (**self).get_mut(id)
    }

    fn remove(&mut self, id: &AccountId) -> Option<Account> {
        (**self).remove(id)
    }

    fn ids(&self) -> Vec<AccountId> {
        (**self).ids()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
