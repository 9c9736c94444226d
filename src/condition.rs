use tracing::trace;

use crate::changeset::ChangeSet;
use crate::error::ConfigError;
use crate::pattern::GlobPattern;

/// One entry in a label's matcher list: an optional `all` pattern group and
/// an optional `any` pattern group.
///
/// - `all` asserts a universal property over the *changeset*: every changed
///   file must satisfy every pattern in the group. One file failing one
///   pattern fails the clause.
/// - `any` asserts an existential: at least one changed file must satisfy
///   every pattern in the group simultaneously.
///
/// An absent clause imposes no constraint, so an empty condition always
/// passes. When both clauses are present, both must hold.
///
/// A file satisfies a pattern inside a group iff the glob matches, inverted
/// for `!`-negated patterns.
#[derive(Debug, Clone, Default)]
pub struct MatchCondition {
    all: Option<Vec<GlobPattern>>,
    any: Option<Vec<GlobPattern>>,
}

impl MatchCondition {
    /// Creates a condition with neither clause set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `all` pattern group, compiling each pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::{ChangeSet, MatchCondition};
    ///
    /// let cond = MatchCondition::new().with_all(["docs/**"]).unwrap();
    /// assert!(cond.matches(&ChangeSet::new(["docs/a.md", "docs/b.md"])));
    /// assert!(!cond.matches(&ChangeSet::new(["docs/a.md", "src/main.rs"])));
    /// ```
    pub fn with_all<I, S>(mut self, patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.all = Some(compile(patterns)?);
        Ok(self)
    }

    /// Sets the `any` pattern group, compiling each pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::{ChangeSet, MatchCondition};
    ///
    /// let cond = MatchCondition::new().with_any(["**/*.ts"]).unwrap();
    /// assert!(cond.matches(&ChangeSet::new(["src/a.ts", "README.md"])));
    /// assert!(!cond.matches(&ChangeSet::new(["README.md"])));
    /// ```
    pub fn with_any<I, S>(mut self, patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.any = Some(compile(patterns)?);
        Ok(self)
    }

    /// The `all` pattern group, if set.
    pub fn all(&self) -> Option<&[GlobPattern]> {
        self.all.as_deref()
    }

    /// The `any` pattern group, if set.
    pub fn any(&self) -> Option<&[GlobPattern]> {
        self.any.as_deref()
    }

    /// Tests this condition against a change set.
    ///
    /// Note the vacuity rules on an empty change set: an `all` clause holds
    /// (universal over nothing) while an `any` clause fails (existential
    /// over nothing).
    pub fn matches(&self, changes: &ChangeSet) -> bool {
        if let Some(group) = &self.all {
            for path in changes.iter() {
                if let Some(pattern) = group.iter().find(|p| !satisfies(p, path)) {
                    trace!(path, pattern = %pattern, "all clause rejected");
                    return false;
                }
            }
        }

        if let Some(group) = &self.any {
            let hit = changes
                .iter()
                .find(|path| group.iter().all(|p| satisfies(p, path)));
            match hit {
                Some(path) => trace!(path, "any clause satisfied"),
                None => {
                    trace!("any clause found no qualifying file");
                    return false;
                }
            }
        }

        true
    }
}

/// Per-pattern verdict inside a group: the glob result, inverted for
/// negated patterns.
fn satisfies(pattern: &GlobPattern, path: &str) -> bool {
    pattern.matches(path) != pattern.is_negated()
}

fn compile<I, S>(patterns: I) -> Result<Vec<GlobPattern>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| GlobPattern::new(p.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_condition_always_passes() {
        let cond = MatchCondition::new();
        assert!(cond.matches(&ChangeSet::new(["anything"])));
    }

    mod all_clause {
        use super::*;

        #[test]
        fn test_every_file_must_match() {
            let cond = MatchCondition::new().with_all(["src/**/*.ts"]).unwrap();
            assert!(cond.matches(&ChangeSet::new(["src/a.ts", "src/b.ts"])));
        }

        #[test]
        fn test_one_failing_file_fails_the_clause() {
            let cond = MatchCondition::new().with_all(["src/**/*.ts"]).unwrap();
            assert!(!cond.matches(&ChangeSet::new(["src/a.ts", "docs/readme.md"])));
        }

        #[test]
        fn test_every_pattern_applies_to_every_file() {
            // Both patterns must hold for each file, not one pattern per file.
            let cond = MatchCondition::new()
                .with_all(["src/**", "**/*.rs"])
                .unwrap();
            assert!(cond.matches(&ChangeSet::new(["src/a.rs", "src/b.rs"])));
            assert!(!cond.matches(&ChangeSet::new(["src/a.rs", "src/style.css"])));
        }

        #[test]
        fn test_negated_pattern_excludes() {
            let cond = MatchCondition::new()
                .with_all(["src/**", "!**/*.md"])
                .unwrap();
            assert!(cond.matches(&ChangeSet::new(["src/a.rs"])));
            assert!(!cond.matches(&ChangeSet::new(["src/a.rs", "src/notes.md"])));
        }

        #[test]
        fn test_vacuous_on_empty_change_set() {
            let cond = MatchCondition::new().with_all(["src/**"]).unwrap();
            assert!(cond.matches(&ChangeSet::empty()));
        }
    }

    mod any_clause {
        use super::*;

        #[test]
        fn test_one_qualifying_file_suffices() {
            let cond = MatchCondition::new().with_any(["**/*.ts"]).unwrap();
            assert!(cond.matches(&ChangeSet::new(["src/a.ts", "README.md"])));
        }

        #[test]
        fn test_no_qualifying_file_fails() {
            let cond = MatchCondition::new().with_any(["**/*.ts"]).unwrap();
            assert!(!cond.matches(&ChangeSet::new(["README.md", "docs/guide.md"])));
        }

        #[test]
        fn test_group_is_conjunctive_per_file() {
            // A single file must satisfy the whole group.
            let cond = MatchCondition::new()
                .with_any(["src/**", "**/*.ts"])
                .unwrap();
            assert!(cond.matches(&ChangeSet::new(["src/a.ts"])));
            // src/a.rs matches src/** only, b.ts matches **/*.ts only.
            assert!(!cond.matches(&ChangeSet::new(["src/a.rs", "b.ts"])));
        }

        #[test]
        fn test_negated_pattern_in_group() {
            // Some changed file outside of docs/.
            let cond = MatchCondition::new().with_any(["!docs/**"]).unwrap();
            assert!(cond.matches(&ChangeSet::new(["docs/a.md", "src/lib.rs"])));
            assert!(!cond.matches(&ChangeSet::new(["docs/a.md"])));
        }

        #[test]
        fn test_existential_fails_on_empty_change_set() {
            let cond = MatchCondition::new().with_any(["**"]).unwrap();
            assert!(!cond.matches(&ChangeSet::empty()));
        }
    }

    mod combined {
        use super::*;

        #[test]
        fn test_both_clauses_must_hold() {
            let cond = MatchCondition::new()
                .with_all(["src/**"])
                .unwrap()
                .with_any(["**/*.test.ts"])
                .unwrap();

            // all holds, any holds
            assert!(cond.matches(&ChangeSet::new(["src/a.ts", "src/a.test.ts"])));
            // all holds, any fails
            assert!(!cond.matches(&ChangeSet::new(["src/a.ts"])));
            // all fails, any holds
            assert!(!cond.matches(&ChangeSet::new(["src/a.test.ts", "README.md"])));
        }
    }
}
