//! Accounts module: the account entity and its credential.
//!
//! Pure domain logic only: no IO, no logging, no storage concerns.

pub mod account;
pub mod credential;

pub use account::{Account, AccountSummary};
pub use credential::Credential;
