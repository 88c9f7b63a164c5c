//! Infrastructure layer: account storage and the ledger service built on it.

pub mod ledger;
pub mod repository;

mod integration_tests;

pub use ledger::{DEMO_ACCOUNTS, Ledger};
pub use repository::{AccountRepository, InMemoryAccountRepository};
