//! Selector options
//!
//! Controls how metadata-based selectors inspect candidates and how missing
//! metadata keys are treated.

use crate::error::{SelectionError, SelectionResult};
use serde::{Deserialize, Serialize};

/// How many sub-elements are consulted by a metadata selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Inspect one exemplar sub-element
    #[default]
    Representative,
    /// Every distinct value across all sub-elements must match
    Pedantic,
}

/// Policy when the requested metadata key is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Keep the candidate
    Include,
    /// Drop the candidate
    #[default]
    Exclude,
    /// Match the value regex against an empty string
    TreatAsEmpty,
}

/// Options for metadata-based selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectorOptions {
    pub validation: Validation,
    pub nas: MissingKeyPolicy,
}

impl SelectorOptions {
    /// Create options with the defaults (representative, exclude)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style validation override
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Builder-style missing-key policy override
    pub fn with_nas(mut self, nas: MissingKeyPolicy) -> Self {
        self.nas = nas;
        self
    }

    /// Load options from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize options to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load options from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize options to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Validation {
    /// Parse from a user-facing name
    pub fn parse(name: &str) -> SelectionResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "representative" => Ok(Self::Representative),
            "pedantic" => Ok(Self::Pedantic),
            other => Err(SelectionError::InvalidConfig(format!(
                "unknown validation mode '{}'",
                other
            ))),
        }
    }
}

impl MissingKeyPolicy {
    /// Parse from a user-facing name
    pub fn parse(name: &str) -> SelectionResult<Self> {
        match name.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "include" => Ok(Self::Include),
            "exclude" => Ok(Self::Exclude),
            "treat_as_empty" => Ok(Self::TreatAsEmpty),
            other => Err(SelectionError::InvalidConfig(format!(
                "unknown missing-key policy '{}'",
                other
            ))),
        }
    }
}
