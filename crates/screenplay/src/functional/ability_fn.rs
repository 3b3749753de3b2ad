//! Abilities as plain functions, identified by reference.

use crate::kind::short_type_name;
use crate::result::ScreenplayResult;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A function-shaped ability producing a `T` from arguments `A`.
///
/// The ability's identity is the allocation behind it: clones share it, but
/// two abilities built from identical functions are different abilities.
/// Several arguments are passed as a tuple.
pub struct AbilityFn<A, T> {
    producer: Arc<dyn Fn(A) -> ScreenplayResult<T> + Send + Sync>,
    label: &'static str,
}

impl<A: 'static, T: 'static> AbilityFn<A, T> {
    /// Wrap a producer function
    #[must_use]
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(A) -> ScreenplayResult<T> + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
            label: std::any::type_name::<F>(),
        }
    }

    /// Identity of this ability
    #[must_use]
    pub fn id(&self) -> AbilityId {
        AbilityId {
            addr: Arc::as_ptr(&self.producer).cast::<()>() as usize,
            label: self.label,
        }
    }

    /// Short name of the wrapped function, for diagnostics
    #[must_use]
    pub fn label(&self) -> String {
        short_type_name(self.label)
    }

    /// Invoke the producer
    ///
    /// # Errors
    ///
    /// Returns whatever the producer returns.
    pub fn invoke(&self, args: A) -> ScreenplayResult<T> {
        (self.producer)(args)
    }

    /// Erased handle for registering with an actor
    #[must_use]
    pub fn handle(&self) -> AbilityHandle {
        AbilityHandle {
            id: self.id(),
            ability: Arc::new(self.clone()),
        }
    }
}

impl<A, T> Clone for AbilityFn<A, T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            label: self.label,
        }
    }
}

impl<A, T> fmt::Debug for AbilityFn<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityFn")
            .field("label", &short_type_name(self.label))
            .finish_non_exhaustive()
    }
}

/// Reference identity of an [`AbilityFn`].
///
/// Equality compares the address only; the label is carried for messages.
/// Registered handles keep their allocation alive, so lookups are exact, but
/// an id kept after its `AbilityFn` and every handle are dropped may compare
/// equal to a later, unrelated allocation.
#[derive(Clone, Copy)]
pub struct AbilityId {
    addr: usize,
    label: &'static str,
}

impl AbilityId {
    /// Short name of the wrapped function
    #[must_use]
    pub fn label(&self) -> String {
        short_type_name(self.label)
    }
}

impl PartialEq for AbilityId {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl Eq for AbilityId {}

impl Hash for AbilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr.hash(state);
    }
}

impl fmt::Debug for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbilityId({:#x}, {})", self.addr, self.label())
    }
}

/// A registered function ability with its argument and output types erased.
///
/// Holding the handle keeps the ability's allocation alive, so its identity
/// cannot be reused while the actor exists.
#[derive(Clone)]
pub struct AbilityHandle {
    id: AbilityId,
    ability: Arc<dyn Any + Send + Sync>,
}

impl AbilityHandle {
    /// Identity of the registered ability
    #[must_use]
    pub const fn id(&self) -> AbilityId {
        self.id
    }

    /// The ability with its types restored, if they are `A` and `T`
    #[must_use]
    pub fn downcast_ref<A: 'static, T: 'static>(&self) -> Option<&AbilityFn<A, T>> {
        self.ability.downcast_ref::<AbilityFn<A, T>>()
    }
}

impl<A: 'static, T: 'static> From<&AbilityFn<A, T>> for AbilityHandle {
    fn from(ability: &AbilityFn<A, T>) -> Self {
        ability.handle()
    }
}

impl fmt::Debug for AbilityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbilityHandle").field(&self.id).finish()
    }
}
