//! Loading rule sets from YAML rule documents.
//!
//! The document shape is two mappings over the same label space:
//!
//! ```yaml
//! matchers:
//!   ts:
//!     - all: ["src/**/*.ts"]
//!   docs: ["docs/**", "**/*.md"]
//! commands:
//!   ts: yarn test
//!   docs: yarn build-docs
//! ```
//!
//! A matcher entry is either a list of `{all, any}` condition objects or a
//! plain pattern list. The plain form is shorthand for one `any` condition
//! per pattern, so the label fires when any changed file matches any listed
//! pattern. Anything else is rejected during decoding rather than narrowed
//! at evaluation time.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::condition::MatchCondition;
use crate::error::ConfigError;
use crate::ruleset::Ruleset;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    matchers: IndexMap<String, MatcherEntry>,
    commands: IndexMap<String, String>,
}

/// The two legal shapes of a matcher entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MatcherEntry {
    Patterns(Vec<String>),
    Conditions(Vec<ConditionEntry>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConditionEntry {
    all: Option<Vec<String>>,
    any: Option<Vec<String>>,
}

impl MatcherEntry {
    fn into_conditions(self) -> Result<Vec<MatchCondition>, ConfigError> {
        match self {
            MatcherEntry::Patterns(patterns) => patterns
                .iter()
                .map(|p| MatchCondition::new().with_any([p.as_str()]))
                .collect(),
            MatcherEntry::Conditions(entries) => entries
                .into_iter()
                .map(ConditionEntry::into_condition)
                .collect(),
        }
    }
}

impl ConditionEntry {
    fn into_condition(self) -> Result<MatchCondition, ConfigError> {
        let mut condition = MatchCondition::new();
        if let Some(all) = self.all {
            condition = condition.with_all(&all)?;
        }
        if let Some(any) = self.any {
            condition = condition.with_any(&any)?;
        }
        Ok(condition)
    }
}

impl Ruleset {
    /// Decodes a YAML rule document into a rule set.
    ///
    /// Glob patterns are compiled during loading, and every command label
    /// is checked for a matchers entry, so a malformed document fails here
    /// rather than mid-evaluation.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::{ChangeSet, Ruleset};
    ///
    /// let ruleset = Ruleset::from_yaml(
    ///     "matchers:\n  ts:\n    - all: [\"src/**/*.ts\"]\ncommands:\n  ts: yarn test\n",
    /// )
    /// .unwrap();
    ///
    /// let triggered = ruleset.evaluate(&ChangeSet::new(["src/a.ts"])).unwrap();
    /// assert!(triggered.contains("yarn test"));
    /// ```
    pub fn from_yaml(document: &str) -> Result<Self, ConfigError> {
        let doc: Document = serde_yaml_ng::from_str(document)?;

        let mut matchers = IndexMap::with_capacity(doc.matchers.len());
        for (label, entry) in doc.matchers {
            matchers.insert(label, entry.into_conditions()?);
        }

        let ruleset = Ruleset::from_parts(matchers, doc.commands);
        ruleset.check_matcher_coverage()?;
        Ok(ruleset)
    }
}
