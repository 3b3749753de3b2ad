//! Screenplay: actors, abilities, tasks and questions for behavioral tests
//!
//! Test scenarios read as domain actions ("the actor performs a task")
//! instead of driver calls. The driver stays behind abilities; steps only
//! ever see the capability an ability hands out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SCREENPLAY Architecture                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Scenario   │    │ Actor      │    │ Ability    │            │
//! │   │ (Task,     │───►│ (resolve   │───►│ (page,     │            │
//! │   │  Question) │    │  by kind)  │    │  browser)  │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two realizations share one resolution contract ([`AbilityRegistry`]):
//!
//! - [`Actor`]: abilities, interactions, tasks and questions are types;
//!   lookups match the exact type.
//! - [`FnActor`]: abilities are [`AbilityFn`]s matched by reference, and
//!   steps are async functions taking the actor by value.

#![warn(missing_docs)]

mod abilities;
mod ability;
mod actor;
mod assertion;
mod config;
pub mod functional;
mod interaction;
mod kind;
pub mod logging;
pub mod mock;
mod outcome;
mod question;
mod registry;
mod result;
mod task;

#[cfg(test)]
mod testing;

pub use abilities::{
    use_browser, use_browser_context, use_page, BrowserCapability, BrowserContextCapability,
    UseBrowser, UseBrowserContext, UsePage,
};
pub use ability::{Ability, AbilityEntry};
pub use actor::{Actor, ActorBuilder, Performance};
pub use assertion::{Assertion, AssertionResult};
pub use config::{EmptySequencePolicy, ScreenplayConfig, ENV_ACTOR_NAME, ENV_EMPTY_SEQUENCES};
pub use functional::{AbilityFn, AbilityHandle, AbilityId, FnActor};
pub use interaction::{DynInteraction, Interaction, Interactions};
pub use kind::Kind;
pub use outcome::Outcome;
pub use question::{pending, AssertionOutcome, Pending, Question};
pub use registry::AbilityRegistry;
pub use result::{ScreenplayError, ScreenplayResult};
pub use task::{DynTask, Task, Tasks};

/// Re-exports for writing scenarios
pub mod prelude {
    pub use crate::functional::{
        asks_about, asserts, create_actor, performs, use_ability, AbilityFn, FnActor,
    };
    pub use crate::question::pending;
    pub use crate::{
        Ability, AbilityRegistry, Actor, Assertion, AssertionResult, Interaction, Interactions,
        Performance, Question, ScreenplayError, ScreenplayResult, Task, Tasks,
    };
    pub use async_trait::async_trait;
}
