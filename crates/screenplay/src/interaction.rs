//! Interactions: single automation steps performed by an actor.

use crate::actor::Actor;
use crate::kind::Kind;
use crate::outcome::Outcome;
use crate::result::{ScreenplayError, ScreenplayResult};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::any::Any;
use std::fmt;

/// One atomic step.
///
/// An interaction pulls the abilities it needs from the actor with
/// [`Actor::use_ability`] and acts through the produced capability.
///
/// # Example
///
/// ```ignore
/// struct Navigate {
///     url: String,
/// }
///
/// #[async_trait]
/// impl Interaction for Navigate {
///     type Output = ();
///
///     async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<()> {
///         let page = actor.use_ability::<UsePage<MockPage>>().await?;
///         page.goto(&self.url).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interaction: Send + Sync + 'static {
    /// What the step returns
    type Output: Send + 'static;

    /// Perform the step as `actor`
    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<Self::Output>;
}

/// Object-safe view of an [`Interaction`], tagged with its kind.
///
/// Implemented for every interaction; this is what tasks own and what
/// sequences of interactions are made of.
pub trait DynInteraction: Send + Sync {
    /// Kind of the concrete interaction
    fn kind(&self) -> Kind;

    /// The concrete interaction
    fn as_any(&self) -> &dyn Any;

    /// Perform the step, erasing its output
    fn attempt_dyn<'a>(&'a self, actor: &'a Actor) -> BoxFuture<'a, ScreenplayResult<Outcome>>;
}

impl<I: Interaction> DynInteraction for I {
    fn kind(&self) -> Kind {
        Kind::of::<I>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attempt_dyn<'a>(&'a self, actor: &'a Actor) -> BoxFuture<'a, ScreenplayResult<Outcome>> {
        Box::pin(async move { self.attempt_as(actor).await.map(Outcome::new) })
    }
}

impl fmt::Debug for dyn DynInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interaction({})", self.kind())
    }
}

/// Ordered interactions owned by a task, fixed at construction.
#[derive(Default)]
pub struct Interactions {
    steps: Vec<Box<dyn DynInteraction>>,
}

pub(crate) static NO_INTERACTIONS: Interactions = Interactions::new();

impl Interactions {
    /// No interactions
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an interaction
    #[must_use]
    pub fn with<I: Interaction>(mut self, interaction: I) -> Self {
        self.steps.push(Box::new(interaction));
        self
    }

    /// Number of interactions
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no interactions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Interactions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DynInteraction> + '_ {
        self.steps.iter().map(|step| &**step)
    }

    /// Kinds in registration order
    #[must_use]
    pub fn kinds(&self) -> Vec<Kind> {
        self.iter().map(DynInteraction::kind).collect()
    }

    /// Whether an interaction of kind `I` is owned
    #[must_use]
    pub fn contains<I: Interaction>(&self) -> bool {
        self.first::<I>().is_some()
    }

    /// First owned interaction of kind `I`
    #[must_use]
    pub fn first<I: Interaction>(&self) -> Option<&I> {
        let kind = Kind::of::<I>();
        self.iter()
            .find(|step| step.kind() == kind)
            .and_then(|step| step.as_any().downcast_ref::<I>())
    }

    /// Attempt every interaction in order, each settled before the next.
    ///
    /// Results are discarded. The first failure stops the sequence and is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an interaction.
    pub async fn attempt_all_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        for step in self.iter() {
            tracing::debug!(actor = actor.name(), interaction = %step.kind(), "attempting interaction");
            let _ = step.attempt_dyn(actor).await?;
        }
        Ok(())
    }

    /// Attempt only the first interaction of kind `I` and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::InteractionNotFound`] when no interaction of
    /// kind `I` is owned, otherwise whatever the interaction returns.
    pub async fn attempt_as<I: Interaction>(&self, actor: &Actor) -> ScreenplayResult<I::Output> {
        let Some(interaction) = self.first::<I>() else {
            let name = Kind::of::<I>().name();
            tracing::debug!(actor = actor.name(), interaction = %name, "interaction not found");
            return Err(ScreenplayError::InteractionNotFound { name });
        };
        tracing::debug!(actor = actor.name(), interaction = %Kind::of::<I>(), "delegating to interaction");
        interaction.attempt_as(actor).await
    }
}

impl fmt::Debug for Interactions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|step| step.kind().name()))
            .finish()
    }
}

impl FromIterator<Box<dyn DynInteraction>> for Interactions {
    fn from_iter<T: IntoIterator<Item = Box<dyn DynInteraction>>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
