/// Errors raised while building or evaluating a rule set.
///
/// Every variant is a configuration problem: a well-formed rule set never
/// fails at match time. Errors are surfaced immediately so the caller can
/// abort the run instead of acting on a partial result.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A glob pattern failed to compile.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as written, including any negation marker.
        pattern: String,
        source: globset::Error,
    },

    /// A label in the commands map has no entry in the matchers map.
    #[error("command label `{label}` has no matchers entry")]
    MissingMatchers { label: String },

    /// The rule document could not be decoded into the expected shape.
    #[cfg(feature = "config")]
    #[error("malformed rule document: {0}")]
    Document(#[from] serde_yaml_ng::Error),
}
