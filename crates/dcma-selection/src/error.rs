//! Error types for dcma-selection

use crate::kinds::EntityKind;
use dcma_regex::RegexError;
use thiserror::Error;

/// Selection errors
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The specifier matches none of the recognised forms
    #[error("Selection is not valid: '{0}'")]
    InvalidSpecifier(String),

    /// An intrinsic selector needs sub-element counts the kind cannot provide
    #[error("The 'numerous', 'fewest', 'more-than', and 'fewer-than' selectors are not implemented for {kind}")]
    UnsupportedIntrinsic { kind: EntityKind },

    /// A metadata value regex failed to compile or match
    #[error(transparent)]
    Regex(#[from] RegexError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for selection
pub type SelectionResult<T> = Result<T, SelectionError>;
