//! Actor configuration.

use crate::result::{ScreenplayError, ScreenplayResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable overriding [`ScreenplayConfig::actor_name`]
pub const ENV_ACTOR_NAME: &str = "SCREENPLAY_ACTOR_NAME";

/// Environment variable overriding [`ScreenplayConfig::empty_sequences`]
pub const ENV_EMPTY_SEQUENCES: &str = "SCREENPLAY_EMPTY_SEQUENCES";

/// What an actor does when asked to perform an empty sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySequencePolicy {
    /// Do nothing
    Ignore,
    /// Do nothing, but log a warning
    #[default]
    Warn,
    /// Fail with [`ScreenplayError::EmptySequence`]
    Reject,
}

impl FromStr for EmptySequencePolicy {
    type Err = ScreenplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(ScreenplayError::Config {
                message: format!("unknown empty sequence policy '{other}'"),
            }),
        }
    }
}

/// Configuration shared by both actor realizations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenplayConfig {
    /// Name used in logs
    pub actor_name: String,
    /// Handling of empty task/interaction sequences
    pub empty_sequences: EmptySequencePolicy,
}

impl Default for ScreenplayConfig {
    fn default() -> Self {
        Self {
            actor_name: "actor".to_string(),
            empty_sequences: EmptySequencePolicy::default(),
        }
    }
}

impl ScreenplayConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the actor name
    #[must_use]
    pub fn actor_name(mut self, name: impl Into<String>) -> Self {
        self.actor_name = name.into();
        self
    }

    /// Set the empty sequence policy
    #[must_use]
    pub const fn empty_sequences(mut self, policy: EmptySequencePolicy) -> Self {
        self.empty_sequences = policy;
        self
    }

    /// Parse from YAML; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::Config`] when the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> ScreenplayResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ScreenplayError::Config {
            message: e.to_string(),
        })
    }

    /// Defaults overridden by `SCREENPLAY_ACTOR_NAME` and
    /// `SCREENPLAY_EMPTY_SEQUENCES`.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenplayError::Config`] when the policy variable holds an
    /// unknown value.
    pub fn from_env() -> ScreenplayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ScreenplayResult<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup(ENV_ACTOR_NAME) {
            config.actor_name = name;
        }
        if let Some(policy) = lookup(ENV_EMPTY_SEQUENCES) {
            config.empty_sequences = policy.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    mod builder_tests {
        use super::*;

        #[test]
        fn test_default() {
            let config = ScreenplayConfig::default();
            assert_eq!(config.actor_name, "actor");
            assert_eq!(config.empty_sequences, EmptySequencePolicy::Warn);
        }

        #[test]
        fn test_builder() {
            let config = ScreenplayConfig::new()
                .actor_name("alice")
                .empty_sequences(EmptySequencePolicy::Reject);
            assert_eq!(config.actor_name, "alice");
            assert_eq!(config.empty_sequences, EmptySequencePolicy::Reject);
        }
    }

    mod yaml_tests {
        use super::*;

        #[test]
        fn test_full_document() {
            let config =
                ScreenplayConfig::from_yaml_str("actor_name: bob\nempty_sequences: ignore\n")
                    .unwrap();
            assert_eq!(config.actor_name, "bob");
            assert_eq!(config.empty_sequences, EmptySequencePolicy::Ignore);
        }

        #[test]
        fn test_partial_document_keeps_defaults() {
            let config = ScreenplayConfig::from_yaml_str("actor_name: carol\n").unwrap();
            assert_eq!(config.empty_sequences, EmptySequencePolicy::Warn);
        }

        #[test]
        fn test_malformed_document() {
            let err = ScreenplayConfig::from_yaml_str("empty_sequences: sometimes\n").unwrap_err();
            assert!(matches!(err, ScreenplayError::Config { .. }));
        }
    }

    mod env_tests {
        use super::*;

        fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect();
            move |key| vars.get(key).cloned()
        }

        #[test]
        fn test_no_overrides() {
            let config = ScreenplayConfig::from_lookup(lookup(&[])).unwrap();
            assert_eq!(config, ScreenplayConfig::default());
        }

        #[test]
        fn test_overrides() {
            let config = ScreenplayConfig::from_lookup(lookup(&[
                (ENV_ACTOR_NAME, "dave"),
                (ENV_EMPTY_SEQUENCES, " Reject "),
            ]))
            .unwrap();
            assert_eq!(config.actor_name, "dave");
            assert_eq!(config.empty_sequences, EmptySequencePolicy::Reject);
        }

        #[test]
        fn test_unknown_policy() {
            let err =
                ScreenplayConfig::from_lookup(lookup(&[(ENV_EMPTY_SEQUENCES, "panic")])).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid configuration: unknown empty sequence policy 'panic'"
            );
        }
    }
}
