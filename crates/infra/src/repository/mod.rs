//! Account repository boundary.
//!
//! The repository owns every account by value and is the only authority on
//! which ids exist. Callers hold ids, not copies.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryAccountRepository;
pub use r#trait::AccountRepository;
