//! Configuration for keyword disambiguation

use crate::error::{RegexError, RegexResult};
use serde::{Deserialize, Serialize};

/// Prefix length every new group starts from
pub const DEFAULT_INITIAL_PREFIX_LENGTH: usize = 2;

/// Largest prefix length a group may grow to before giving up
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 10;

/// Settings for a [`RegexGroup`](crate::RegexGroup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Number of leading characters per keyword part that must be typed
    pub initial_prefix_length: usize,
    /// Bound on the prefix length; exceeding it fails the insertion
    pub max_prefix_length: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            initial_prefix_length: DEFAULT_INITIAL_PREFIX_LENGTH,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

impl GroupConfig {
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
    pub fn validate(&self) -> RegexResult<()> {
        if self.initial_prefix_length == 0 {
            return Err(RegexError::InvalidConfig(
                "initial_prefix_length must be positive".to_string(),
            ));
        }
        if self.initial_prefix_length > self.max_prefix_length {
            return Err(RegexError::InvalidConfig(
                "initial_prefix_length must not exceed max_prefix_length".to_string(),
            ));
        }
        Ok(())
    }
}
