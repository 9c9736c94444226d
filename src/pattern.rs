use std::fmt;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::ConfigError;

/// A single glob pattern, optionally negated with a leading `!`.
///
/// The pattern text is compiled once at construction time; matching never
/// fails afterwards. `*`, `?`, and character classes stay within one path
/// segment, while `**` crosses segments, so `src/*.ts` matches `src/a.ts`
/// but not `src/sub/a.ts`.
///
/// Negation is deliberately *not* applied by [`matches`](Self::matches):
/// the flag is exposed via [`is_negated`](Self::is_negated) and inverted by
/// the group-evaluation logic in [`MatchCondition`](crate::MatchCondition).
#[derive(Debug, Clone)]
pub struct GlobPattern {
    text: String,
    negated: bool,
    matcher: GlobMatcher,
}

impl GlobPattern {
    /// Compiles a pattern, stripping one leading `!` as a negation marker.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::GlobPattern;
    ///
    /// let p = GlobPattern::new("src/**/*.ts").unwrap();
    /// assert!(p.matches("src/app/main.ts"));
    /// assert!(!p.matches("docs/readme.md"));
    ///
    /// let n = GlobPattern::new("!**/*.md").unwrap();
    /// assert!(n.is_negated());
    /// assert!(n.matches("docs/readme.md"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let (negated, text) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let matcher = GlobBuilder::new(text)
            .literal_separator(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        Ok(Self {
            text: text.to_string(),
            negated,
            matcher,
        })
    }

    /// The pattern text without its negation marker.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the pattern was written with a leading `!`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Tests the compiled glob against a path.
    ///
    /// Ignores the negation flag; callers combining patterns into groups
    /// invert the result for negated patterns.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}
