//! Integration tests for the ledger stack.
//!
//! Tests: Ledger → AccountRepository → Account
//!
//! Verifies:
//! - The end-to-end account scenarios (deposit, overdraw, transfer, sign-in,
//!   save/get/delete, unknown lookups)
//! - A caller holding only an id sees every mutation
//! - Random operation sequences keep balances non-negative and totals conserved

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use ledger_accounts::Account;
    use ledger_core::{AccountId, Decimal, LedgerError};

    use crate::ledger::Ledger;
    use crate::repository::{AccountRepository, InMemoryAccountRepository};

    fn dec(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    fn ledger_with(balances: &[i64]) -> (Ledger, Vec<AccountId>) {
        let mut ledger = Ledger::new();
        let ids = balances
            .iter()
            .enumerate()
            .map(|(i, balance)| {
                ledger
                    .create_account(format!("user{i}"), dec(*balance), "secret")
                    .unwrap()
                    .id()
                    .clone()
            })
            .collect();
        (ledger, ids)
    }

    #[test]
    fn deposit_scenario() {
        let (mut ledger, ids) = ledger_with(&[1000]);
        ledger.deposit(&ids[0], dec(500)).unwrap();
        assert_eq!(ledger.account(&ids[0]).unwrap().balance(), dec(1500));
    }

    #[test]
    fn overdraw_scenario() {
        let (mut ledger, ids) = ledger_with(&[1000]);
        let err = ledger.withdraw(&ids[0], dec(1500)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(ledger.account(&ids[0]).unwrap().balance(), dec(1000));
    }

    #[test]
    fn transfer_scenario() {
        let (mut ledger, ids) = ledger_with(&[1000, 1000]);
        ledger.transfer(&ids[0], &ids[1], dec(300)).unwrap();
        assert_eq!(ledger.account(&ids[0]).unwrap().balance(), dec(700));
        assert_eq!(ledger.account(&ids[1]).unwrap().balance(), dec(1300));
    }

    #[test]
    fn authentication_scenario() {
        let (ledger, ids) = ledger_with(&[1000]);
        assert!(ledger.account(&ids[0]).unwrap().authenticate("secret"));
        assert!(!ledger.account(&ids[0]).unwrap().authenticate("wrong"));
    }

    #[test]
    fn save_get_delete_scenario() {
        let mut repo = InMemoryAccountRepository::new();
        let id = AccountId::from("0");
        repo.save(Account::open(id.clone(), "a", dec(1000), "pw").unwrap());

        assert_eq!(repo.get(&id).map(|a| a.id().clone()), Some(id.clone()));
        repo.delete(&id);
        assert!(repo.get(&id).is_none());
    }

    #[test]
    fn unknown_id_scenario() {
        let (ledger, _) = ledger_with(&[1000]);
        assert!(ledger.account(&AccountId::from("nonexistent-id")).is_none());
    }

    #[test]
    fn id_handle_observes_mutations_made_through_the_repository() {
        let (mut ledger, ids) = ledger_with(&[1000, 0]);
        let session = ids[0].clone();

        ledger
            .repository_mut()
            .get_mut(&session)
            .unwrap()
            .withdraw(dec(250))
            .unwrap();
        ledger.transfer(&ids[1], &session, Decimal::ZERO).unwrap();

        assert_eq!(ledger.account(&session).unwrap().balance(), dec(750));
    }

    #[test]
    fn ledger_over_boxed_repository() {
        let repo: Box<dyn AccountRepository> = Box::new(InMemoryAccountRepository::new());
        let mut ledger = Ledger::with_repository(repo);
        let id = ledger.create_account("a", dec(3), "pw").unwrap().id().clone();
        assert_eq!(ledger.deposit(&id, dec(2)).unwrap(), dec(5));
    }

    #[derive(Debug, Clone)]
    enum Step {
        Deposit(usize, i64),
        Withdraw(usize, i64),
        Transfer(usize, usize, i64),
        Close(usize),
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        let who = 0usize..4;
        let amount = -500i64..5_000;
        prop_oneof![
            4 => (who.clone(), amount.clone()).prop_map(|(w, a)| Step::Deposit(w, a)),
            4 => (who.clone(), amount.clone()).prop_map(|(w, a)| Step::Withdraw(w, a)),
            6 => (who.clone(), who.clone(), amount).prop_map(|(f, t, a)| Step::Transfer(f, t, a)),
            1 => who.prop_map(Step::Close),
        ]
    }

    fn total(ledger: &Ledger) -> Decimal {
        ledger
            .repository()
            .ids()
            .iter()
            .filter_map(|id| ledger.account(id))
            .map(|a| a.balance())
            .sum()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: across the ledger, balances stay non-negative, failed
        /// operations change nothing, and transfers conserve the total.
        #[test]
        fn ledger_operations_preserve_invariants(
            steps in prop::collection::vec(step_strategy(), 1..60)
        ) {
            let (mut ledger, ids) = ledger_with(&[1000, 1000, 500, 0]);

            for step in steps {
                let before = total(&ledger);
                let result = match &step {
                    Step::Deposit(w, a) => ledger.deposit(&ids[*w], dec(*a)).map(|_| ()),
                    Step::Withdraw(w, a) => ledger.withdraw(&ids[*w], dec(*a)).map(|_| ()),
                    Step::Transfer(f, t, a) => {
                        ledger.transfer(&ids[*f], &ids[*t], dec(*a)).map(|_| ())
                    }
                    Step::Close(w) => {
                        ledger.close_account(&ids[*w]);
                        Ok(())
                    }
                };

                for id in ledger.repository().ids() {
                    prop_assert!(ledger.account(&id).unwrap().balance() >= Decimal::ZERO);
                }

                match (&step, result) {
                    (Step::Close(_), _) => {}
                    (_, Err(_)) => prop_assert_eq!(total(&ledger), before),
                    (Step::Transfer(..), Ok(())) => prop_assert_eq!(total(&ledger), before),
                    _ => {}
                }
            }
        }
    }
}
