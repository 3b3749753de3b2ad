//! Ability resolution contract shared by both actor realizations.
//!
//! The class-style [`Actor`](crate::Actor) keys its abilities by [`Kind`](crate::Kind);
//! the functional [`FnActor`](crate::FnActor) keys them by function identity.
//! Both resolve through [`AbilityRegistry::resolve`], so lookup order and the
//! failure contract are the same for each.

use crate::result::{ScreenplayError, ScreenplayResult};

/// An ordered, fixed set of abilities that can be resolved by key.
///
/// Resolution scans entries in registration order and returns the first one
/// matching the key. Later entries with the same key are unreachable.
pub trait AbilityRegistry {
    /// What callers ask for
    type Key: ?Sized;

    /// What is stored per registered ability
    type Entry;

    /// Registered entries, in registration order
    fn entries(&self) -> &[Self::Entry];

    /// Whether `entry` satisfies `key`
    fn matches(entry: &Self::Entry, key: &Self::Key) -> bool;

    /// Error reported when no entry satisfies `key`
    fn not_found(key: &Self::Key) -> ScreenplayError;

    /// Resolve `key` to the first matching entry.
    ///
    /// # Errors
    ///
    /// Returns the backend's not-found error when nothing matches.
    fn resolve(&self, key: &Self::Key) -> ScreenplayResult<&Self::Entry> {
        self.entries()
            .iter()
            .find(|entry| Self::matches(entry, key))
            .ok_or_else(|| Self::not_found(key))
    }

    /// Whether `key` would resolve
    fn can_resolve(&self, key: &Self::Key) -> bool {
        self.entries().iter().any(|entry| Self::matches(entry, key))
    }

    /// Number of registered abilities
    fn ability_count(&self) -> usize {
        self.entries().len()
    }
}
