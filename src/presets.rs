//! Predefined condition groups for common changeset shapes.
//!
//! Each preset builds a ready-made condition list for a rule-set label, so
//! hosts assembling rule sets in code don't repeat the same glob groups.
//!
//! # Example
//!
//! ```
//! use tripwire::Ruleset;
//! use tripwire::presets::{DocsOnly, RustProject};
//!
//! let ruleset = Ruleset::new()
//!     .with_label("docs", DocsOnly::conditions().unwrap(), "skip-ci")
//!     .with_label("rust", RustProject::conditions().unwrap(), "cargo test");
//! ```
//!
//! Presets compose with hand-written conditions by concatenating the lists
//! (condition lists are OR-ed):
//!
//! ```
//! use tripwire::MatchCondition;
//! use tripwire::presets::RustProject;
//!
//! let mut conditions = RustProject::conditions().unwrap();
//! conditions.push(MatchCondition::new().with_any(["build.rs"]).unwrap());
//! ```

use crate::condition::MatchCondition;
use crate::error::ConfigError;

/// Matches changesets that touch only documentation.
///
/// Uses an `all` clause, so a single non-documentation file in the
/// changeset defeats the preset. Typical use: a label whose command skips
/// the expensive test suite.
///
/// # Example
///
/// ```
/// use tripwire::ChangeSet;
/// use tripwire::presets::DocsOnly;
///
/// let conditions = DocsOnly::conditions().unwrap();
/// assert!(conditions.iter().any(|c| c.matches(&ChangeSet::new(["docs/guide.md"]))));
/// assert!(!conditions.iter().any(|c| c.matches(&ChangeSet::new(["docs/guide.md", "src/lib.rs"]))));
/// ```
pub struct DocsOnly;

impl DocsOnly {
    /// Builds the docs-only condition list.
    pub fn conditions() -> Result<Vec<MatchCondition>, ConfigError> {
        Ok(vec![
            MatchCondition::new().with_all(["**/*.{md,markdown,txt}"])?,
        ])
    }
}

/// Matches changesets that touch Rust sources or Cargo manifests.
///
/// # Example
///
/// ```
/// use tripwire::ChangeSet;
/// use tripwire::presets::RustProject;
///
/// let conditions = RustProject::conditions().unwrap();
/// assert!(conditions.iter().any(|c| c.matches(&ChangeSet::new(["src/lib.rs", "README.md"]))));
/// ```
pub struct RustProject;

impl RustProject {
    /// Builds the Rust-project condition list.
    pub fn conditions() -> Result<Vec<MatchCondition>, ConfigError> {
        Ok(vec![
            MatchCondition::new().with_any(["**/*.rs"])?,
            MatchCondition::new().with_any(["**/Cargo.{toml,lock}"])?,
        ])
    }
}

/// Matches changesets that touch CI workflow definitions.
pub struct CiWorkflows;

impl CiWorkflows {
    /// Builds the CI-workflows condition list.
    pub fn conditions() -> Result<Vec<MatchCondition>, ConfigError> {
        Ok(vec![
            MatchCondition::new().with_any([".github/workflows/**"])?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changeset::ChangeSet;

    fn matches(conditions: &[MatchCondition], changes: &ChangeSet) -> bool {
        conditions.iter().any(|c| c.matches(changes))
    }

    mod docs_only {
        use super::*;

        #[test]
        fn test_pure_docs_changeset() {
            let conditions = DocsOnly::conditions().unwrap();
            let changes = ChangeSet::new(["README.md", "docs/deep/guide.markdown"]);
            assert!(matches(&conditions, &changes));
        }

        #[test]
        fn test_mixed_changeset_is_rejected() {
            let conditions = DocsOnly::conditions().unwrap();
            let changes = ChangeSet::new(["README.md", "src/lib.rs"]);
            assert!(!matches(&conditions, &changes));
        }
    }

    mod rust_project {
        use super::*;

        #[test]
        fn test_source_change() {
            let conditions = RustProject::conditions().unwrap();
            assert!(matches(
                &conditions,
                &ChangeSet::new(["src/lib.rs", "README.md"])
            ));
        }

        #[test]
        fn test_manifest_change() {
            let conditions = RustProject::conditions().unwrap();
            assert!(matches(&conditions, &ChangeSet::new(["Cargo.toml"])));
            assert!(matches(
                &conditions,
                &ChangeSet::new(["crates/sub/Cargo.lock"])
            ));
        }

        #[test]
        fn test_unrelated_change() {
            let conditions = RustProject::conditions().unwrap();
            assert!(!matches(&conditions, &ChangeSet::new(["docs/guide.md"])));
        }
    }

    mod ci_workflows {
        use super::*;

        #[test]
        fn test_workflow_change() {
            let conditions = CiWorkflows::conditions().unwrap();
            assert!(matches(
                &conditions,
                &ChangeSet::new([".github/workflows/test.yml"])
            ));
            assert!(!matches(&conditions, &ChangeSet::new([".github/CODEOWNERS"])));
        }
    }
}
