//! Shared fixtures for unit tests.

use crate::ability::Ability;
use crate::actor::Actor;
use crate::interaction::Interaction;
use crate::result::{ScreenplayError, ScreenplayResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Ability whose capability is a shared log of executed steps
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub(crate) fn record(&self, entry: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.to_string());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Ability for Journal {
    type Capability = Self;

    async fn can(&self) -> ScreenplayResult<Self> {
        Ok(self.clone())
    }
}

/// Records "log-in" and returns the user name
#[derive(Debug)]
pub(crate) struct LogIn;

#[async_trait]
impl Interaction for LogIn {
    type Output = &'static str;

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<&'static str> {
        actor.use_ability::<Journal>().await?.record("log-in");
        Ok("alice")
    }
}

/// Records "navigate-home" and returns the landing URL
#[derive(Debug)]
pub(crate) struct NavigateHome;

#[async_trait]
impl Interaction for NavigateHome {
    type Output = String;

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<String> {
        actor.use_ability::<Journal>().await?.record("navigate-home");
        Ok("https://example.com/home".to_string())
    }
}

/// Records "broken" and fails
#[derive(Debug)]
pub(crate) struct Broken;

#[async_trait]
impl Interaction for Broken {
    type Output = ();

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        actor.use_ability::<Journal>().await?.record("broken");
        Err(ScreenplayError::step("Broken", "element detached"))
    }
}

/// Actor that can only keep a journal
pub(crate) fn journaling_actor() -> (Actor, Journal) {
    let journal = Journal::default();
    let actor = Actor::builder().who_can(journal.clone()).build();
    (actor, journal)
}
