//! Result and error types for Screenplay.

use thiserror::Error;

/// Result type for Screenplay operations
pub type ScreenplayResult<T> = Result<T, ScreenplayError>;

/// Errors that can occur while an actor performs, asks or asserts
#[derive(Debug, Error)]
pub enum ScreenplayError {
    /// No registered ability has the requested kind
    #[error("Actor does not have ability with name of '{name}'.")]
    AbilityNotFound {
        /// Short name of the requested ability kind
        name: String,
    },

    /// No registered ability is the requested function
    #[error("Actor does not have the specified ability.")]
    UnregisteredAbility {
        /// Diagnostic label of the requested function, if known
        label: Option<String>,
    },

    /// A task owns no interaction of the requested kind
    #[error("Interaction with name of '{name}' not found.")]
    InteractionNotFound {
        /// Short name of the requested interaction kind
        name: String,
    },

    /// A task owns no sub-task of the requested kind
    #[error("Task with name of '{name}' not found.")]
    TaskNotFound {
        /// Short name of the requested task kind
        name: String,
    },

    /// An empty sequence was performed while the actor rejects them
    #[error("Actor '{actor}' was asked to perform an empty sequence of {what}")]
    EmptySequence {
        /// Actor name
        actor: String,
        /// "tasks" or "interactions"
        what: &'static str,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// A step failed while acting through its capability
    #[error("Step '{step}' failed: {message}")]
    StepFailed {
        /// Step name
        step: String,
        /// Error message
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Any other error raised by user code
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ScreenplayError {
    /// Build an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Build a step failure
    #[must_use]
    pub fn step(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error raised by user code
    #[must_use]
    pub fn custom(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(error))
    }

    /// Whether this is one of the lookup failures
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AbilityNotFound { .. }
                | Self::UnregisteredAbility { .. }
                | Self::InteractionNotFound { .. }
                | Self::TaskNotFound { .. }
        )
    }
}
