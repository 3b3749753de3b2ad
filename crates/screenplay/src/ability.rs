//! Abilities: providers of the capability values an actor acts through.
//!
//! An ability wraps whatever handle an interaction needs (a page, a browser,
//! an API client) and hands it out through [`Ability::can`]. The actor never
//! looks inside the capability; it only routes it from the ability to the
//! step that asked for it.

use crate::kind::Kind;
use crate::result::ScreenplayResult;
use async_trait::async_trait;
use std::any::Any;
use std::fmt;

/// A provider of exactly one capability value.
///
/// Abilities are immutable once registered. Producing the capability should
/// hand out a handle, not act through it.
///
/// # Example
///
/// ```ignore
/// struct CallAnApi {
///     base_url: String,
/// }
///
/// #[async_trait]
/// impl Ability for CallAnApi {
///     type Capability = String;
///
///     async fn can(&self) -> ScreenplayResult<String> {
///         Ok(self.base_url.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Ability: Send + Sync + 'static {
    /// The value this ability produces
    type Capability: Send;

    /// Produce the capability value
    async fn can(&self) -> ScreenplayResult<Self::Capability>;
}

/// A registered ability, tagged with its kind at construction.
pub struct AbilityEntry {
    kind: Kind,
    ability: Box<dyn Any + Send + Sync>,
}

impl AbilityEntry {
    /// Register an ability
    #[must_use]
    pub fn new<A: Ability>(ability: A) -> Self {
        Self {
            kind: Kind::of::<A>(),
            ability: Box::new(ability),
        }
    }

    /// Kind the entry was registered under
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The ability as its concrete type, if it is an `A`
    #[must_use]
    pub fn downcast_ref<A: Ability>(&self) -> Option<&A> {
        self.ability.downcast_ref::<A>()
    }
}

impl fmt::Debug for AbilityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityEntry")
            .field("kind", &self.kind.name())
            .finish_non_exhaustive()
    }
}
