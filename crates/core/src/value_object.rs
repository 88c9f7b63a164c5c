//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values are
/// the same value. They are immutable; "changing" one means building a new one.
///
/// - **Value Object**: `Amount(12.50)` equals any other `Amount(12.50)`.
/// - **Entity**: two accounts with equal balances are still different accounts.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
