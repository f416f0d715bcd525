//! Error types for dcma-funcparse

use thiserror::Error;

/// Syntax errors raised while parsing function-call expressions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unable to parse any function from input")]
    EmptyInput,

    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error("Unbalanced parentheses")]
    UnbalancedParenthesis,

    #[error("Function names cannot be empty")]
    EmptyFunctionName,

    #[error("Function already named '{0}'")]
    DuplicateFunctionName(String),

    #[error("Unexpected text between functions: '{0}'")]
    StrayText(String),

    #[error("Function already has a block of nested functions")]
    DuplicateChildBlock,

    #[error("Nested functions have no parent function")]
    OrphanChildBlock,

    #[error("Incomplete function statement '{0}': open and close its parameter list")]
    IncompleteFunction(String),

    #[error("Escape character present, but nothing to escape")]
    DanglingEscape,

    #[error("Parameter '{0}' cannot be both a fraction and a percentage")]
    AmbiguousSuffix(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseError>;
