use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::changeset::ChangeSet;
use crate::condition::MatchCondition;
use crate::error::ConfigError;
use crate::triggered::TriggeredCommands;

/// A rule set maps labels to match conditions and to the command each label
/// triggers.
///
/// A label matches when at least one of its conditions passes (logical OR
/// over the list, evaluated in order). The commands of all matching labels
/// are collected into a [`TriggeredCommands`] set.
///
/// Both maps preserve insertion order, so evaluating and logging walk the
/// labels in the order the configuration declared them. A rule set is
/// immutable once built; concurrent evaluations over independent change
/// sets need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    matchers: IndexMap<String, Vec<MatchCondition>>,
    commands: IndexMap<String, String>,
}

impl Ruleset {
    /// Creates an empty rule set.
    ///
    /// An empty rule set triggers nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label with its conditions and command.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::{ChangeSet, MatchCondition, Ruleset};
    ///
    /// let ruleset = Ruleset::new().with_label(
    ///     "ts",
    ///     vec![MatchCondition::new().with_all(["src/**/*.ts"]).unwrap()],
    ///     "yarn test",
    /// );
    ///
    /// let triggered = ruleset.evaluate(&ChangeSet::new(["src/a.ts"])).unwrap();
    /// assert!(triggered.contains("yarn test"));
    /// ```
    pub fn with_label(
        mut self,
        label: impl Into<String>,
        conditions: Vec<MatchCondition>,
        command: impl Into<String>,
    ) -> Self {
        let label = label.into();
        self.matchers.insert(label.clone(), conditions);
        self.commands.insert(label, command.into());
        self
    }

    /// Builds a rule set from separately assembled matcher and command maps.
    ///
    /// The maps are taken as-is; a command label missing from `matchers` is
    /// reported by [`evaluate`](Self::evaluate), not here.
    pub fn from_parts(
        matchers: IndexMap<String, Vec<MatchCondition>>,
        commands: IndexMap<String, String>,
    ) -> Self {
        Self { matchers, commands }
    }

    /// The labels that have a command, in configuration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// The command for a label, if any.
    pub fn command(&self, label: &str) -> Option<&str> {
        self.commands.get(label).map(String::as_str)
    }

    /// The conditions for a label, if any.
    pub fn conditions(&self, label: &str) -> Option<&[MatchCondition]> {
        self.matchers.get(label).map(Vec::as_slice)
    }

    /// Folds a change set into the set of triggered commands.
    ///
    /// An empty change set triggers nothing. A command label with no
    /// matchers entry is a configuration error and aborts the evaluation
    /// with no partial result.
    ///
    /// Evaluation is pure: inputs are not mutated and no I/O happens.
    /// `tracing` events describing per-label outcomes are emitted as a side
    /// channel only.
    pub fn evaluate(&self, changes: &ChangeSet) -> Result<TriggeredCommands, ConfigError> {
        self.check_matcher_coverage()?;

        let mut triggered = TriggeredCommands::default();
        if changes.is_empty() {
            debug!("change set is empty; no commands triggered");
            return Ok(triggered);
        }

        for (label, command) in &self.commands {
            // Coverage was checked above.
            let Some(conditions) = self.matchers.get(label) else {
                continue;
            };
            if conditions.iter().any(|c| c.matches(changes)) {
                debug!(label = %label, command = %command, "label matched");
                triggered.insert(command.clone());
            } else {
                trace!(label = %label, "no condition matched");
            }
        }

        Ok(triggered)
    }

    /// Fails if any command label lacks a matchers entry.
    pub(crate) fn check_matcher_coverage(&self) -> Result<(), ConfigError> {
        for label in self.commands.keys() {
            if !self.matchers.contains_key(label) {
                return Err(ConfigError::MissingMatchers {
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }
}
