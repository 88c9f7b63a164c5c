//! Account identifiers and the process-wide id sequence.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an account.
///
/// Ids are plain strings so they can be typed back by a user; the ledger issues
/// them from an [`IdSequence`], but any string is a valid key for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Monotonic counter handing out account ids `"0"`, `"1"`, `"2"`, ...
///
/// There is deliberately no way to rewind or reset it: an issued id is never
/// issued again by the same sequence.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume and return the next id.
    pub fn next_id(&mut self) -> AccountId {
        let id = AccountId(self.next.to_string());
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
