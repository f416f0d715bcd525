//! Error types for dcma-regex

use thiserror::Error;

/// Errors raised while compiling, matching, or disambiguating patterns
#[derive(Debug, Error)]
pub enum RegexError {
    /// The pattern is not a valid regular expression
    #[error("Invalid regex '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The backtracking engine gave up while matching
    #[error("Regex '{pattern}' failed while matching: {source}")]
    Match {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// No prefix length up to the configured bound separates the vocabulary
    #[error("Unable to disambiguate '{keyword}': conflicts remain at prefix length {prefix_length}")]
    DisambiguationExhausted {
        keyword: String,
        prefix_length: usize,
    },

    /// The keyword was never inserted into the group
    #[error("Keyword not registered: {0}")]
    UnknownKeyword(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for regex operations
pub type RegexResult<T> = Result<T, RegexError>;
