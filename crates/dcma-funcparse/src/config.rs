//! Parser configuration

use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};

/// Characters with a fixed role in the grammar
pub const RESERVED_CHARS: [char; 9] = ['\'', '"', '(', ')', '[', ']', '{', '}', ','];

/// Caller-selected control characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Passes the following character through verbatim inside quotes
    pub escape_char: char,
    /// Separates function statements
    pub separator_char: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            escape_char: '\\',
            separator_char: ';',
        }
    }
}

impl ParserConfig {
    pub fn new(escape_char: char, separator_char: char) -> Self {
        Self {
            escape_char,
            separator_char,
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ParseResult<()> {
        if self.escape_char == self.separator_char {
            return Err(ParseError::InvalidConfig(
                "escape_char and separator_char must differ".to_string(),
            ));
        }
        for (field, c) in [
            ("escape_char", self.escape_char),
            ("separator_char", self.separator_char),
        ] {
            if RESERVED_CHARS.contains(&c) {
                return Err(ParseError::InvalidConfig(format!(
                    "{} cannot be the reserved character '{}'",
                    field, c
                )));
            }
        }
        Ok(())
    }
}
