//! Tripwire: A library for selecting CI commands to run from a pull request's changed files.
//!
//! Tripwire evaluates **change sets** against **rule sets** to produce the set of
//! **triggered commands**.
//!
//! A rule set maps labels to glob match conditions and to a command string. Each
//! condition carries an optional `all` pattern group (every changed file must
//! satisfy every pattern) and an optional `any` pattern group (some changed file
//! must satisfy every pattern). A label fires when any of its conditions passes,
//! and the commands of all firing labels are collected, deduplicated, into the
//! result.
//!
//! # Example
//!
//! ```
//! use tripwire::{ChangeSet, MatchCondition, Ruleset};
//!
//! let ruleset = Ruleset::new()
//!     // Run the TypeScript suite when the changeset is all TypeScript
//!     .with_label(
//!         "ts",
//!         vec![MatchCondition::new().with_all(["src/**/*.ts"]).unwrap()],
//!         "yarn test",
//!     )
//!     // Rebuild docs when any changed file is under docs/
//!     .with_label(
//!         "docs",
//!         vec![MatchCondition::new().with_any(["docs/**"]).unwrap()],
//!         "yarn build-docs",
//!     );
//!
//! let changes = ChangeSet::new(["src/a.ts", "src/b.ts"]);
//! let triggered = ruleset.evaluate(&changes).unwrap();
//! assert!(triggered.contains("yarn test"));
//! assert!(!triggered.contains("yarn build-docs"));
//! ```
//!
//! Fetching the changed-file list, parsing pull-request identifiers, and
//! executing the selected commands are the host's concern; Tripwire only
//! decides *which* commands a changeset calls for.

mod changeset;
mod condition;
mod error;
mod pattern;
mod ruleset;
mod triggered;

#[cfg(feature = "config")]
mod config;

#[cfg(feature = "presets")]
pub mod presets;

pub use changeset::ChangeSet;
pub use condition::MatchCondition;
pub use error::ConfigError;
pub use pattern::GlobPattern;
pub use ruleset::Ruleset;
pub use triggered::TriggeredCommands;
