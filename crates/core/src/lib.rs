//! `ledger-core` — domain foundation building blocks for the account ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod amount;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use amount::Amount;
pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, IdSequence};
pub use value_object::ValueObject;

pub use rust_decimal::Decimal;
