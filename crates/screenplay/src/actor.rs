//! The actor: who performs tasks, asks questions and holds abilities.
//!
//! ```text
//! Actor ──resolves──► Ability ──produces──► capability value
//!   │                                             │
//!   └──► Task ──owns──► Interaction ◄─────────────┘
//!   └──► Question ──answer──► assertion
//! ```

use crate::ability::{Ability, AbilityEntry};
use crate::config::{EmptySequencePolicy, ScreenplayConfig};
use crate::interaction::{DynInteraction, Interaction, Interactions};
use crate::kind::Kind;
use crate::outcome::Outcome;
use crate::question::{AssertionOutcome, Question};
use crate::registry::AbilityRegistry;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::task::{DynTask, Task, Tasks};
use std::fmt;

/// What [`Actor::performs`] is asked to run.
///
/// Sequences are homogeneous by construction: a list is either all tasks or
/// all interactions.
pub enum Performance<'a> {
    /// One task; its result is returned
    Task(&'a dyn DynTask),
    /// One interaction; its result is returned
    Interaction(&'a dyn DynInteraction),
    /// Tasks performed in order; results are discarded
    Tasks(Vec<&'a dyn DynTask>),
    /// Interactions attempted in order; results are discarded
    Interactions(Vec<&'a dyn DynInteraction>),
}

impl<'a> Performance<'a> {
    /// A single task
    #[must_use]
    pub fn task<T: Task>(task: &'a T) -> Self {
        Self::Task(task)
    }

    /// A single interaction
    #[must_use]
    pub fn interaction<I: Interaction>(interaction: &'a I) -> Self {
        Self::Interaction(interaction)
    }

    /// A sequence of tasks
    #[must_use]
    pub fn tasks(tasks: impl IntoIterator<Item = &'a dyn DynTask>) -> Self {
        Self::Tasks(tasks.into_iter().collect())
    }

    /// A sequence of interactions
    #[must_use]
    pub fn interactions(interactions: impl IntoIterator<Item = &'a dyn DynInteraction>) -> Self {
        Self::Interactions(interactions.into_iter().collect())
    }
}

impl<'a> From<&'a Interactions> for Performance<'a> {
    fn from(interactions: &'a Interactions) -> Self {
        Self::interactions(interactions.iter())
    }
}

impl<'a> From<&'a Tasks> for Performance<'a> {
    fn from(tasks: &'a Tasks) -> Self {
        Self::tasks(tasks.iter())
    }
}

impl fmt::Debug for Performance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(task) => write!(f, "Task({})", task.kind()),
            Self::Interaction(step) => write!(f, "Interaction({})", step.kind()),
            Self::Tasks(tasks) => write!(f, "Tasks(len={})", tasks.len()),
            Self::Interactions(steps) => write!(f, "Interactions(len={})", steps.len()),
        }
    }
}

/// Drives a scenario through a fixed set of abilities.
///
/// Abilities are registered at construction and never change. Looking one up
/// by kind returns the first registered ability of exactly that type; later
/// abilities of the same type are never reached.
///
/// # Example
///
/// ```ignore
/// let actor = Actor::builder()
///     .named("alice")
///     .who_can(UsePage::new(page))
///     .build();
///
/// actor.performs(Performance::task(&SignIn::new())).await?;
/// actor.asserts(&CurrentUrl, |url| url == "https://example.com").await?;
/// ```
pub struct Actor {
    config: ScreenplayConfig,
    abilities: Vec<AbilityEntry>,
}

impl Actor {
    /// Actor holding `abilities`, in order
    #[must_use]
    pub fn new(abilities: impl IntoIterator<Item = AbilityEntry>) -> Self {
        Self::with_config(abilities, ScreenplayConfig::default())
    }

    /// Actor holding `abilities`, with explicit configuration
    #[must_use]
    pub fn with_config(
        abilities: impl IntoIterator<Item = AbilityEntry>,
        config: ScreenplayConfig,
    ) -> Self {
        Self {
            config,
            abilities: abilities.into_iter().collect(),
        }
    }

    /// Start building an actor
    #[must_use]
    pub fn builder() -> ActorBuilder {
        ActorBuilder::default()
    }

    /// Actor name from the configuration
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.actor_name
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScreenplayConfig {
        &self.config
    }

    /// Whether an ability of kind `A` is registered
    #[must_use]
    pub fn has_ability<A: Ability>(&self) -> bool {
        self.can_resolve(&Kind::of::<A>())
    }

    /// Capability of the first registered ability of kind `A`.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::AbilityNotFound`] naming `A` when no such
    /// ability is registered, or whatever the ability's producer returns.
    pub async fn use_ability<A: Ability>(&self) -> ScreenplayResult<A::Capability> {
        let kind = Kind::of::<A>();
        let entry = match self.resolve(&kind) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(actor = self.name(), ability = %kind, "ability not found");
                return Err(err);
            }
        };
        let ability = entry
            .downcast_ref::<A>()
            .ok_or_else(|| Self::not_found(&kind))?;
        tracing::trace!(actor = self.name(), ability = %kind, "using ability");
        ability.can().await
    }

    /// Perform a task, an interaction, or a homogeneous sequence of either.
    ///
    /// A single step's result is returned as an [`Outcome`]; sequences run
    /// strictly in order, discard results and return an empty outcome. An
    /// empty sequence is handled per [`ScreenplayConfig::empty_sequences`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step, unchanged, or
    /// [`ScreenplayError::EmptySequence`] when empty sequences are rejected.
    pub async fn performs(&self, performance: impl Into<Performance<'_>>) -> ScreenplayResult<Outcome> {
        match performance.into() {
            Performance::Task(task) => {
                tracing::debug!(actor = self.name(), task = %task.kind(), "performing task");
                task.perform_dyn(self).await
            }
            Performance::Interaction(step) => {
                tracing::debug!(actor = self.name(), interaction = %step.kind(), "attempting interaction");
                step.attempt_dyn(self).await
            }
            Performance::Tasks(tasks) => {
                if tasks.is_empty() {
                    return self.empty_sequence("tasks");
                }
                for task in tasks {
                    tracing::debug!(actor = self.name(), task = %task.kind(), "performing task");
                    let _ = task.perform_dyn(self).await?;
                }
                Ok(Outcome::none())
            }
            Performance::Interactions(steps) => {
                if steps.is_empty() {
                    return self.empty_sequence("interactions");
                }
                for step in steps {
                    tracing::debug!(actor = self.name(), interaction = %step.kind(), "attempting interaction");
                    let _ = step.attempt_dyn(self).await?;
                }
                Ok(Outcome::none())
            }
        }
    }

    /// Perform a task and return its typed result.
    ///
    /// # Errors
    ///
    /// Returns whatever the task returns.
    pub async fn performs_task<T: Task>(&self, task: &T) -> ScreenplayResult<T::Output> {
        tracing::debug!(actor = self.name(), task = %Kind::of::<T>(), "performing task");
        task.perform_as(self).await
    }

    /// Attempt an interaction and return its typed result.
    ///
    /// # Errors
    ///
    /// Returns whatever the interaction returns.
    pub async fn attempts<I: Interaction>(&self, interaction: &I) -> ScreenplayResult<I::Output> {
        tracing::debug!(actor = self.name(), interaction = %Kind::of::<I>(), "attempting interaction");
        interaction.attempt_as(self).await
    }

    /// Ask a question and return the answer as observed.
    ///
    /// # Errors
    ///
    /// Returns whatever the question returns.
    pub async fn asks_about<Q: Question>(&self, question: &Q) -> ScreenplayResult<Q::Answer> {
        tracing::debug!(actor = self.name(), question = %Kind::of::<Q>(), "asking question");
        question.ask_as(self).await
    }

    /// Ask a question and settle `assert` over the answer.
    ///
    /// The assertion's verdict is awaited whether it is synchronous or
    /// pending, and a failure is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the question's error, or the assertion's.
    pub async fn asserts<Q, F, R>(&self, question: &Q, assert: F) -> ScreenplayResult<()>
    where
        Q: Question,
        F: FnOnce(Q::Answer) -> R,
        R: AssertionOutcome,
    {
        let answer = self.asks_about(question).await?;
        let verdict = assert(answer).settle().await;
        tracing::debug!(
            actor = self.name(),
            question = %Kind::of::<Q>(),
            passed = verdict.is_ok(),
            "assertion settled"
        );
        verdict
    }

    fn empty_sequence(&self, what: &'static str) -> ScreenplayResult<Outcome> {
        match self.config.empty_sequences {
            EmptySequencePolicy::Ignore => Ok(Outcome::none()),
            EmptySequencePolicy::Warn => {
                tracing::warn!(actor = self.name(), what, "performing an empty sequence does nothing");
                Ok(Outcome::none())
            }
            EmptySequencePolicy::Reject => Err(ScreenplayError::EmptySequence {
                actor: self.name().to_string(),
                what,
            }),
        }
    }
}

impl AbilityRegistry for Actor {
    type Key = Kind;
    type Entry = AbilityEntry;

    fn entries(&self) -> &[AbilityEntry] {
        &self.abilities
    }

    fn matches(entry: &AbilityEntry, key: &Kind) -> bool {
        entry.kind() == *key
    }

    fn not_found(key: &Kind) -> ScreenplayError {
        ScreenplayError::AbilityNotFound { name: key.name() }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.config.actor_name)
            .field("abilities", &self.abilities)
            .finish()
    }
}

/// Builder for [`Actor`]
#[derive(Debug, Default)]
pub struct ActorBuilder {
    config: ScreenplayConfig,
    abilities: Vec<AbilityEntry>,
}

impl ActorBuilder {
    /// Set the actor name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.config.actor_name = name.into();
        self
    }

    /// Replace the configuration, keeping abilities
    #[must_use]
    pub fn config(mut self, config: ScreenplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an ability
    #[must_use]
    pub fn who_can<A: Ability>(mut self, ability: A) -> Self {
        self.abilities.push(AbilityEntry::new(ability));
        self
    }

    /// Build the actor
    #[must_use]
    pub fn build(self) -> Actor {
        Actor::with_config(self.abilities, self.config)
    }
}
