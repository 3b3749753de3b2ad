//! Type-erased results of performed steps.

use crate::kind::short_type_name;
use std::any::Any;
use std::fmt;

/// Whatever a performed task or interaction returned.
///
/// Sequences return an empty outcome. A single step's outcome can be taken
/// back as its concrete type with [`Outcome::downcast`].
pub struct Outcome {
    value: Option<Box<dyn Any + Send>>,
    type_name: &'static str,
}

impl Outcome {
    /// Wrap a step's result
    #[must_use]
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The outcome of a sequence
    #[must_use]
    pub const fn none() -> Self {
        Self {
            value: None,
            type_name: "()",
        }
    }

    /// Whether nothing was returned
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Whether the returned value is a `T`
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.as_ref().is_some_and(|v| v.is::<T>())
    }

    /// Short type name of the returned value
    #[must_use]
    pub fn type_name(&self) -> String {
        short_type_name(self.type_name)
    }

    /// Borrow the returned value as a `T`
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_ref().and_then(|v| v.downcast_ref::<T>())
    }

    /// Take the returned value as a `T`.
    ///
    /// # Errors
    ///
    /// Gives the outcome back unchanged when it does not hold a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.value {
            Some(value) => match value.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(value) => Err(Self {
                    value: Some(value),
                    type_name: self.type_name,
                }),
            },
            None => Err(self),
        }
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("Outcome(none)")
        } else {
            write!(f, "Outcome({})", self.type_name())
        }
    }
}
