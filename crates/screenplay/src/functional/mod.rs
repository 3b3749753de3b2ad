//! Functional realization: actors as values, abilities as functions.
//!
//! Tasks, interactions and questions are plain async functions taking the
//! actor by value. [`FnActor`] is cheap to clone, so steps can own it for as
//! long as they run.
//!
//! ```ignore
//! let page_ability = AbilityFn::new(use_page::<MockPage>);
//! let actor = create_actor([page_ability.handle()]);
//!
//! performs(&actor, |actor| async move {
//!     let page = use_ability(&actor, &page_ability, page.clone()).await?;
//!     page.goto("https://example.com").await
//! })
//! .await?;
//! ```

mod ability_fn;

pub use ability_fn::{AbilityFn, AbilityHandle, AbilityId};

use crate::config::ScreenplayConfig;
use crate::question::AssertionOutcome;
use crate::registry::AbilityRegistry;
use crate::result::{ScreenplayError, ScreenplayResult};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// An actor as a value: a fixed, ordered list of function abilities.
#[derive(Clone)]
pub struct FnActor {
    inner: Arc<FnActorInner>,
}

struct FnActorInner {
    config: ScreenplayConfig,
    abilities: Vec<AbilityHandle>,
}

impl FnActor {
    /// Actor holding `abilities`, in order
    #[must_use]
    pub fn new(abilities: impl IntoIterator<Item = AbilityHandle>) -> Self {
        Self::with_config(abilities, ScreenplayConfig::default())
    }

    /// Actor holding `abilities`, with explicit configuration
    #[must_use]
    pub fn with_config(
        abilities: impl IntoIterator<Item = AbilityHandle>,
        config: ScreenplayConfig,
    ) -> Self {
        Self {
            inner: Arc::new(FnActorInner {
                config,
                abilities: abilities.into_iter().collect(),
            }),
        }
    }

    /// Actor name from the configuration
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.config.actor_name
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ScreenplayConfig {
        &self.inner.config
    }

    /// Whether `ability` itself is registered
    #[must_use]
    pub fn has_ability<A: 'static, T: 'static>(&self, ability: &AbilityFn<A, T>) -> bool {
        self.can_resolve(&ability.id())
    }
}

impl AbilityRegistry for FnActor {
    type Key = AbilityId;
    type Entry = AbilityHandle;

    fn entries(&self) -> &[AbilityHandle] {
        &self.inner.abilities
    }

    fn matches(entry: &AbilityHandle, key: &AbilityId) -> bool {
        entry.id() == *key
    }

    fn not_found(key: &AbilityId) -> ScreenplayError {
        ScreenplayError::UnregisteredAbility {
            label: Some(key.label()),
        }
    }
}

impl fmt::Debug for FnActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnActor")
            .field("name", &self.inner.config.actor_name)
            .field("abilities", &self.inner.abilities)
            .finish()
    }
}

/// Actor holding `abilities`, in order
#[must_use]
pub fn create_actor(abilities: impl IntoIterator<Item = AbilityHandle>) -> FnActor {
    FnActor::new(abilities)
}

/// Invoke `ability` with `args`, provided the actor registered that very
/// ability.
///
/// # Errors
///
/// Returns [`ScreenplayError::UnregisteredAbility`] when the actor does not
/// hold `ability` (a different function with the same body does not count),
/// or whatever the producer returns.
pub async fn use_ability<A: 'static, T: 'static>(
    actor: &FnActor,
    ability: &AbilityFn<A, T>,
    args: A,
) -> ScreenplayResult<T> {
    let id = ability.id();
    let handle = match actor.resolve(&id) {
        Ok(handle) => handle,
        Err(err) => {
            tracing::debug!(actor = actor.name(), ability = %id.label(), "ability not registered");
            return Err(err);
        }
    };
    let registered = handle
        .downcast_ref::<A, T>()
        .ok_or_else(|| FnActor::not_found(&id))?;
    tracing::trace!(actor = actor.name(), ability = %id.label(), "using ability");
    registered.invoke(args)
}

/// Run a task or interaction and return its result.
///
/// # Errors
///
/// Returns whatever the step returns.
pub async fn performs<F, Fut, T>(actor: &FnActor, step: F) -> ScreenplayResult<T>
where
    F: FnOnce(FnActor) -> Fut,
    Fut: Future<Output = ScreenplayResult<T>>,
{
    tracing::debug!(actor = actor.name(), step = std::any::type_name::<F>(), "performing step");
    step(actor.clone()).await
}

/// Ask a question and return the answer as observed.
///
/// # Errors
///
/// Returns whatever the question returns.
pub async fn asks_about<Q, Fut, T>(actor: &FnActor, question: Q) -> ScreenplayResult<T>
where
    Q: FnOnce(FnActor) -> Fut,
    Fut: Future<Output = ScreenplayResult<T>>,
{
    tracing::debug!(actor = actor.name(), question = std::any::type_name::<Q>(), "asking question");
    question(actor.clone()).await
}

/// Ask a question and settle `assert` over the answer.
///
/// # Errors
///
/// Returns the question's error, or the assertion's, unchanged.
pub async fn asserts<Q, Fut, T, F, R>(actor: &FnActor, question: Q, assert: F) -> ScreenplayResult<()>
where
    Q: FnOnce(FnActor) -> Fut,
    Fut: Future<Output = ScreenplayResult<T>>,
    F: FnOnce(T) -> R,
    R: AssertionOutcome,
{
    let answer = asks_about(actor, question).await?;
    let verdict = assert(answer).settle().await;
    tracing::debug!(actor = actor.name(), passed = verdict.is_ok(), "assertion settled");
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn greet(name: &'static str) -> ScreenplayResult<String> {
        Ok(format!("hello {name}"))
    }

    fn count() -> AbilityFn<(), usize> {
        let calls = Arc::new(AtomicUsize::new(0));
        AbilityFn::new(move |()| Ok(calls.fetch_add(1, Ordering::SeqCst) + 1))
    }

    mod ability_tests {
        use super::*;

        #[tokio::test]
        async fn test_registered_ability_is_invoked_with_args() {
            let greeting = AbilityFn::new(greet);
            let actor = create_actor([greeting.handle()]);
            assert!(actor.has_ability(&greeting));
            let value = use_ability(&actor, &greeting, "alice").await.unwrap();
            assert_eq!(value, "hello alice");
        }

        #[tokio::test]
        async fn test_equal_but_distinct_function_is_rejected() {
            let registered = AbilityFn::new(greet);
            let lookalike = AbilityFn::new(greet);
            let actor = create_actor([registered.handle()]);
            let err = use_ability(&actor, &lookalike, "bob").await.unwrap_err();
            assert_eq!(err.to_string(), "Actor does not have the specified ability.");
            assert!(err.is_not_found());
            assert!(!actor.has_ability(&lookalike));
        }

        #[tokio::test]
        async fn test_actor_without_abilities() {
            let actor = create_actor([]);
            let err = use_ability(&actor, &count(), ()).await.unwrap_err();
            assert!(matches!(err, ScreenplayError::UnregisteredAbility { .. }));
        }

        #[tokio::test]
        async fn test_each_use_invokes_producer() {
            let counter = count();
            let actor = create_actor([AbilityHandle::from(&counter)]);
            assert_eq!(use_ability(&actor, &counter, ()).await.unwrap(), 1);
            assert_eq!(use_ability(&actor, &counter, ()).await.unwrap(), 2);
        }

        #[tokio::test]
        async fn test_producer_failure_propagates() {
            let failing: AbilityFn<(), ()> =
                AbilityFn::new(|()| Err(ScreenplayError::step("use_page", "closed")));
            let actor = create_actor([failing.handle()]);
            let err = use_ability(&actor, &failing, ()).await.unwrap_err();
            assert!(matches!(err, ScreenplayError::StepFailed { .. }));
        }

        #[test]
        fn test_clones_share_abilities() {
            let greeting = AbilityFn::new(greet);
            let actor = FnActor::with_config(
                [greeting.handle()],
                ScreenplayConfig::new().actor_name("frank"),
            );
            let copy = actor.clone();
            assert_eq!(copy.name(), "frank");
            assert!(copy.has_ability(&greeting));
            assert_eq!(copy.ability_count(), 1);
        }
    }

    mod step_tests {
        use super::*;

        #[tokio::test]
        async fn test_performs_returns_result() {
            let greeting = AbilityFn::new(greet);
            let actor = create_actor([greeting.handle()]);
            let result = performs(&actor, |actor| {
                let greeting = greeting.clone();
                async move { use_ability(&actor, &greeting, "carol").await }
            })
            .await
            .unwrap();
            assert_eq!(result, "hello carol");
        }

        #[tokio::test]
        async fn test_performs_propagates_failure() {
            let actor = create_actor([]);
            let err = performs(&actor, |_| async {
                Err::<(), _>(ScreenplayError::step("Click", "not visible"))
            })
            .await
            .unwrap_err();
            assert_eq!(err.to_string(), "Step 'Click' failed: not visible");
        }

        #[tokio::test]
        async fn test_asks_about_returns_answer() {
            let actor = create_actor([]);
            let answer = asks_about(&actor, |actor| async move { Ok::<_, ScreenplayError>(actor.ability_count()) })
                .await
                .unwrap();
            assert_eq!(answer, 0);
        }

        #[tokio::test]
        async fn test_asserts_bool_and_pending_verdicts() {
            let actor = create_actor([]);
            let url = |_: FnActor| async { Ok::<_, ScreenplayError>("https://example.com".to_string()) };
            asserts(&actor, url, |v| v == "https://example.com")
                .await
                .unwrap();
            let err = asserts(&actor, url, |v| v == "other").await.unwrap_err();
            assert!(matches!(err, ScreenplayError::AssertionFailed { .. }));
            let err = asserts(&actor, url, |v| {
                async move { Err::<(), _>(ScreenplayError::assertion(v)) }.boxed()
            })
            .await
            .unwrap_err();
            assert_eq!(err.to_string(), "Assertion failed: https://example.com");
        }
    }
}
