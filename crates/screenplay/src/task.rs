//! Tasks: named, reusable compositions of interactions.

use crate::actor::Actor;
use crate::interaction::{Interaction, Interactions, NO_INTERACTIONS};
use crate::kind::Kind;
use crate::outcome::Outcome;
use crate::result::{ScreenplayError, ScreenplayResult};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::any::Any;
use std::fmt;

/// A composite step.
///
/// A task owns an ordered list of [`Interactions`] (and optionally sub-tasks)
/// fixed at construction, and decides in [`Task::perform_as`] how to run
/// them. The provided methods cover the two usual shapes: run everything in
/// order, or delegate to one owned step by kind.
///
/// # Example
///
/// ```ignore
/// struct SignIn {
///     steps: Interactions,
/// }
///
/// #[async_trait]
/// impl Task for SignIn {
///     type Output = ();
///
///     fn interactions(&self) -> &Interactions {
///         &self.steps
///     }
///
///     async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
///         self.attempt_interactions_as(actor).await
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// What the task returns
    type Output: Send + 'static;

    /// Owned interactions, in order
    fn interactions(&self) -> &Interactions {
        &NO_INTERACTIONS
    }

    /// Owned sub-tasks, in order
    fn subtasks(&self) -> &Tasks {
        &NO_TASKS
    }

    /// Perform the task as `actor`
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<Self::Output>;

    /// Attempt every owned interaction in order, discarding results.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an interaction; later interactions
    /// do not run.
    async fn attempt_interactions_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        self.interactions().attempt_all_as(actor).await
    }

    /// Attempt the first owned interaction of kind `I` and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::InteractionNotFound`] when none is owned.
    async fn attempt_interaction_as<I: Interaction>(
        &self,
        actor: &Actor,
    ) -> ScreenplayResult<I::Output> {
        self.interactions().attempt_as::<I>(actor).await
    }

    /// Perform the first owned sub-task of kind `T` and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::TaskNotFound`] when none is owned.
    async fn attempt_task_as<T: Task>(&self, actor: &Actor) -> ScreenplayResult<T::Output> {
        self.subtasks().perform_as::<T>(actor).await
    }
}

/// Object-safe view of a [`Task`], tagged with its kind.
pub trait DynTask: Send + Sync {
    /// Kind of the concrete task
    fn kind(&self) -> Kind;

    /// The concrete task
    fn as_any(&self) -> &dyn Any;

    /// Perform the task, erasing its output
    fn perform_dyn<'a>(&'a self, actor: &'a Actor) -> BoxFuture<'a, ScreenplayResult<Outcome>>;
}

impl<T: Task> DynTask for T {
    fn kind(&self) -> Kind {
        Kind::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn perform_dyn<'a>(&'a self, actor: &'a Actor) -> BoxFuture<'a, ScreenplayResult<Outcome>> {
        Box::pin(async move { self.perform_as(actor).await.map(Outcome::new) })
    }
}

impl fmt::Debug for dyn DynTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task({})", self.kind())
    }
}

/// Ordered sub-tasks owned by a task, fixed at construction.
#[derive(Default)]
pub struct Tasks {
    tasks: Vec<Box<dyn DynTask>>,
}

pub(crate) static NO_TASKS: Tasks = Tasks::new();

impl Tasks {
    /// No tasks
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task
    #[must_use]
    pub fn with<T: Task>(mut self, task: T) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DynTask> + '_ {
        self.tasks.iter().map(|task| &**task)
    }

    /// Whether a task of kind `T` is owned
    #[must_use]
    pub fn contains<T: Task>(&self) -> bool {
        self.first::<T>().is_some()
    }

    /// First owned task of kind `T`
    #[must_use]
    pub fn first<T: Task>(&self) -> Option<&T> {
        let kind = Kind::of::<T>();
        self.iter()
            .find(|task| task.kind() == kind)
            .and_then(|task| task.as_any().downcast_ref::<T>())
    }

    /// Perform every task in order, each settled before the next.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a task.
    pub async fn perform_all_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        for task in self.iter() {
            tracing::debug!(actor = actor.name(), task = %task.kind(), "performing task");
            let _ = task.perform_dyn(actor).await?;
        }
        Ok(())
    }

    /// Perform only the first task of kind `T` and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::TaskNotFound`] when no task of kind `T` is
    /// owned, otherwise whatever the task returns.
    pub async fn perform_as<T: Task>(&self, actor: &Actor) -> ScreenplayResult<T::Output> {
        let Some(task) = self.first::<T>() else {
            let name = Kind::of::<T>().name();
            tracing::debug!(actor = actor.name(), task = %name, "task not found");
            return Err(ScreenplayError::TaskNotFound { name });
        };
        task.perform_as(actor).await
    }
}

impl fmt::Debug for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|task| task.kind().name()))
            .finish()
    }
}

impl FromIterator<Box<dyn DynTask>> for Tasks {
    fn from_iter<I: IntoIterator<Item = Box<dyn DynTask>>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
