//! Assertion helpers producing verdicts for [`Actor::asserts`](crate::Actor::asserts).

use crate::result::{ScreenplayError, ScreenplayResult};
use std::fmt::Debug;

/// Result of an assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
}

impl AssertionResult {
    /// Create a passing assertion result
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing assertion result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Convert into the error channel used by the actor.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::AssertionFailed`] carrying the message when
    /// the assertion did not pass.
    pub fn into_result(self) -> ScreenplayResult<()> {
        if self.passed {
            Ok(())
        } else {
            Err(ScreenplayError::AssertionFailed {
                message: self.message,
            })
        }
    }
}

/// Verdicts over question answers.
#[derive(Debug)]
pub struct Assertion;

impl Assertion {
    /// The answer equals `expected`
    #[must_use]
    pub fn equals<T: PartialEq + Debug + ?Sized>(expected: &T, answer: &T) -> AssertionResult {
        if expected == answer {
            return AssertionResult::pass();
        }
        AssertionResult::fail(format!("answer was {answer:?}, wanted {expected:?}"))
    }

    /// The question observed something at all
    #[must_use]
    pub fn is_some<T>(answer: &Option<T>) -> AssertionResult {
        match answer {
            Some(_) => AssertionResult::pass(),
            None => AssertionResult::fail("question observed nothing"),
        }
    }
}
