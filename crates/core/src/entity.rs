//! Entity trait: objects that keep their identity while their state changes.

/// A domain object identified by its id rather than by its field values.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Whether `other` is the same entity, regardless of the state either holds.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
