//! Questions: read-only observations an actor makes for assertions.

use crate::actor::Actor;
use crate::assertion::AssertionResult;
use crate::result::{ScreenplayError, ScreenplayResult};
use async_trait::async_trait;
use futures::future::{self, BoxFuture, Ready};
use std::future::Future;

/// A read-only probe.
///
/// Asking a question must not change what the actor can do. The answer is
/// handed back to the caller as is.
#[async_trait]
pub trait Question: Send + Sync + 'static {
    /// What the question observes
    type Answer: Send;

    /// Observe the answer as `actor`
    async fn ask_as(&self, actor: &Actor) -> ScreenplayResult<Self::Answer>;
}

/// Anything an assertion function may return.
///
/// Synchronous verdicts and pending ones are settled through the same
/// channel, so a failing assertion surfaces as an `Err` from
/// [`Actor::asserts`] whichever style it was written in. Failures are
/// returned unchanged.
pub trait AssertionOutcome {
    /// Future resolving to the verdict
    type Verdict: Future<Output = ScreenplayResult<()>>;

    /// Settle the verdict
    fn settle(self) -> Self::Verdict;
}

impl AssertionOutcome for () {
    type Verdict = Ready<ScreenplayResult<()>>;

    fn settle(self) -> Self::Verdict {
        future::ready(Ok(()))
    }
}

impl AssertionOutcome for bool {
    type Verdict = Ready<ScreenplayResult<()>>;

    fn settle(self) -> Self::Verdict {
        let verdict = if self {
            Ok(())
        } else {
            Err(ScreenplayError::assertion("assertion returned false"))
        };
        future::ready(verdict)
    }
}

impl AssertionOutcome for ScreenplayResult<()> {
    type Verdict = Ready<ScreenplayResult<()>>;

    fn settle(self) -> Self::Verdict {
        future::ready(self)
    }
}

impl AssertionOutcome for AssertionResult {
    type Verdict = Ready<ScreenplayResult<()>>;

    fn settle(self) -> Self::Verdict {
        future::ready(self.into_result())
    }
}

impl<'a> AssertionOutcome for BoxFuture<'a, ScreenplayResult<()>> {
    type Verdict = Self;

    fn settle(self) -> Self {
        self
    }
}

/// A verdict still being computed; see [`pending`].
#[derive(Debug)]
#[must_use = "a pending verdict does nothing unless returned from an assertion"]
pub struct Pending<F>(F);

impl<F: Future<Output = ScreenplayResult<()>>> AssertionOutcome for Pending<F> {
    type Verdict = F;

    fn settle(self) -> F {
        self.0
    }
}

/// Wrap any future as an assertion verdict, without boxing it.
///
/// ```ignore
/// actor
///     .asserts(&CurrentUrl, |url| pending(async move { check(&url).await }))
///     .await?;
/// ```
pub fn pending<F: Future<Output = ScreenplayResult<()>>>(verdict: F) -> Pending<F> {
    Pending(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use futures::future::FutureExt;

    #[tokio::test]
    async fn test_unit_passes() {
        ().settle().await.unwrap();
    }

    #[tokio::test]
    async fn test_bool_verdicts() {
        true.settle().await.unwrap();
        let err = false.settle().await.unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: assertion returned false");
    }

    #[tokio::test]
    async fn test_result_passes_through_unchanged() {
        let failing: ScreenplayResult<()> = Err(ScreenplayError::step("Check", "stale"));
        let err = failing.settle().await.unwrap_err();
        assert!(matches!(err, ScreenplayError::StepFailed { .. }));
    }

    #[tokio::test]
    async fn test_assertion_result() {
        AssertionResult::pass().settle().await.unwrap();
        let err = AssertionResult::fail("expected 1, got 2")
            .settle()
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: expected 1, got 2");
    }

    #[tokio::test]
    async fn test_pending_verdict_is_awaited() {
        let pending: BoxFuture<'static, ScreenplayResult<()>> = async {
            tokio::task::yield_now().await;
            Err(ScreenplayError::assertion("late"))
        }
        .boxed();
        let err = pending.settle().await.unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: late");
    }

    fn question_kind<Q: Question>() -> Kind {
        Kind::of::<Q>()
    }

    struct PageTitle;

    #[async_trait]
    impl Question for PageTitle {
        type Answer = String;

        async fn ask_as(&self, _actor: &Actor) -> ScreenplayResult<String> {
            Ok("Home".to_string())
        }
    }

    #[test]
    fn test_any_question_has_a_kind() {
        assert_eq!(question_kind::<PageTitle>().name(), "PageTitle");
    }

    #[tokio::test]
    async fn test_unboxed_pending_verdict() {
        let err = pending(async {
            tokio::task::yield_now().await;
            Err::<(), _>(ScreenplayError::assertion("late"))
        })
        .settle()
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: late");
        pending(async { Ok::<(), ScreenplayError>(()) }).settle().await.unwrap();
    }

    #[tokio::test]
    async fn test_boxed_verdict_may_borrow() {
        let expected = String::from("Home");
        let expected = expected.as_str();
        let answer = String::from("Away");
        let verdict: BoxFuture<'_, ScreenplayResult<()>> = async move {
            AssertionResult::fail(format!("{answer} != {expected}")).into_result()
        }
        .boxed();
        let err = verdict.settle().await.unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: Away != Home");
    }
}
