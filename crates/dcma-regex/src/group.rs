//! Mutually exclusive, abbreviation-tolerant keyword patterns
//!
//! Each keyword is split into parts on `-`, `_`, and spaces. The first
//! `prefix_length` characters of every part are mandatory; the remaining
//! characters are individually optional and parts may be joined by an optional
//! separator. For `prefix_length = 3`, `"gaussian"` becomes
//! `gau s?s?i?a?n?` and `"in-plane"` becomes `in [-_ ]? pla n?e?`.
//!
//! Two keywords conflict when their truncated parts (the prefix tuple) are
//! equal. On conflict the prefix length grows by one and every keyword is
//! rebuilt, so the registry never holds two keywords sharing a prefix tuple.

use crate::compile::{compile, escape, Pattern};
use crate::config::GroupConfig;
use crate::error::{RegexError, RegexResult};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// A registry of keywords and their disambiguated patterns
///
/// Insertion takes `&mut self`, so a group has a single owner while it is
/// growing; once settled it can be shared for read-only matching.
#[derive(Debug, Clone)]
pub struct RegexGroup {
    config: GroupConfig,
    prefix_length: usize,
    patterns: BTreeMap<String, Pattern>,
    prefixes: BTreeMap<Vec<String>, String>,
}

impl Default for RegexGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexGroup {
    /// Create an empty group with the default configuration
    pub fn new() -> Self {
        Self::empty(GroupConfig::default())
    }

    /// Create an empty group with a custom configuration
    ///
    /// Fails with [`RegexError::InvalidConfig`] if the configuration does not
    /// pass [`GroupConfig::validate`].
    pub fn with_config(config: GroupConfig) -> RegexResult<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: GroupConfig) -> Self {
        Self {
            config,
            prefix_length: config.initial_prefix_length,
            patterns: BTreeMap::new(),
            prefixes: BTreeMap::new(),
        }
    }

    /// Build a group from a vocabulary, inserting keywords in order
    pub fn from_keywords<I, S>(keywords: I) -> RegexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().extended(keywords)
    }

    /// Build a group from a vocabulary using a custom configuration
    pub fn from_keywords_with_config<I, S>(config: GroupConfig, keywords: I) -> RegexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(config)?.extended(keywords)
    }

    fn extended<I, S>(mut self, keywords: I) -> RegexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            self.insert(keyword)?;
        }
        Ok(self)
    }

    /// The configuration this group was created with
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Current number of mandatory characters per keyword part
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Number of registered keywords
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no keyword has been registered
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered keywords in lexicographic order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Register a keyword, rebuilding the whole group if it conflicts
    ///
    /// Inserting an exact duplicate is a no-op. Returns the keyword so callers
    /// can register and keep the canonical name in one expression. If no
    /// prefix length within the bound separates the vocabulary, the group is
    /// left exactly as it was before the call.
    pub fn insert(&mut self, keyword: impl Into<String>) -> RegexResult<String> {
        let keyword = keyword.into();
        let settled = (self.prefix_length, self.patterns.clone(), self.prefixes.clone());

        let mut bag: BTreeSet<String> = BTreeSet::new();
        if self.patterns.contains_key(&keyword) {
            debug!("Input '{}' is a duplicate, skipping it", keyword);
        } else {
            bag.insert(keyword.clone());
        }

        while !bag.is_empty() {
            let mut decorations: BTreeMap<String, String> = BTreeMap::new();
            let mut local_prefixes: BTreeMap<Vec<String>, String> = BTreeMap::new();

            for pattern in &bag {
                let (decorated, prefix) = decorate(pattern, self.prefix_length);
                trace!("Generated regex '{}' from pattern '{}'", decorated, pattern);
                decorations.insert(pattern.clone(), decorated);
                local_prefixes.insert(prefix, pattern.clone());
            }

            let unique_in_bag = local_prefixes.len() == bag.len();
            let unique_globally = local_prefixes
                .keys()
                .all(|prefix| !self.prefixes.contains_key(prefix));

            if unique_in_bag && unique_globally {
                for (pattern, decorated) in decorations {
                    let compiled = compile(&decorated)?;
                    self.patterns.insert(pattern, compiled);
                }
                self.prefixes.extend(local_prefixes);
                break;
            }

            let next_length = self.prefix_length + 1;
            if next_length > self.config.max_prefix_length {
                (self.prefix_length, self.patterns, self.prefixes) = settled;
                return Err(RegexError::DisambiguationExhausted {
                    keyword,
                    prefix_length: next_length,
                });
            }

            self.prefix_length = next_length;
            debug!(
                "Detected conflict with input '{}', increasing prefix length to {} and trying again",
                keyword, self.prefix_length
            );

            bag.extend(self.patterns.keys().cloned());
            self.patterns.clear();
            self.prefixes.clear();
        }

        Ok(keyword)
    }

    /// Look up the compiled pattern for a registered keyword
    pub fn locate(&self, keyword: &str) -> RegexResult<&Pattern> {
        self.patterns
            .get(keyword)
            .ok_or_else(|| RegexError::UnknownKeyword(keyword.to_string()))
    }

    /// Test whether user input `raw` selects the registered `keyword`
    pub fn matches(&self, raw: &str, keyword: &str) -> RegexResult<bool> {
        self.locate(keyword)?.is_match(raw)
    }

    /// Find the registered keyword that `raw` abbreviates, if any
    pub fn resolve(&self, raw: &str) -> RegexResult<Option<&str>> {
        for (keyword, pattern) in &self.patterns {
            if pattern.is_match(raw)? {
                return Ok(Some(keyword.as_str()));
            }
        }
        Ok(None)
    }
}

/// Split a keyword into parts along hyphens, underscores, and spaces
fn split_parts(keyword: &str) -> Vec<&str> {
    keyword
        .split(|c| c == '-' || c == '_' || c == ' ')
        .filter(|part| !part.is_empty())
        .collect()
}

/// Build the pattern body and prefix tuple for one keyword
fn decorate(keyword: &str, prefix_length: usize) -> (String, Vec<String>) {
    let parts = split_parts(keyword);
    let mut out = String::new();
    let mut prefix = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        if i != 0 {
            out.push_str("[-_ ]?");
        }

        let head: String = part.chars().take(prefix_length).collect();
        out.push_str(&escape(&head));

        for c in part.chars().skip(prefix_length) {
            out.push_str(&escape(&c.to_string()));
            out.push('?');
        }

        prefix.push(head);
    }

    (out, prefix)
}
