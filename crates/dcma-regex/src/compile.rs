//! Regex compilation with the application-wide flags
//!
//! Patterns always match the *whole* candidate string and ignore case. The
//! user's pattern is wrapped in a non-capturing group, so alternations such as
//! `a|b` are anchored as a unit.

use crate::error::{RegexError, RegexResult};
use std::fmt;

/// A compiled, anchored, case-insensitive pattern
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: fancy_regex::Regex,
}

impl Pattern {
    /// The pattern text as supplied by the caller (without decoration)
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test whether `text` matches the pattern in its entirety
    pub fn is_match(&self, text: &str) -> RegexResult<bool> {
        self.regex.is_match(text).map_err(|e| RegexError::Match {
            pattern: self.source.clone(),
            source: Box::new(e),
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// Compile a pattern using the application-wide default settings
pub fn compile(pattern: &str) -> RegexResult<Pattern> {
    let decorated = format!("(?i)^(?:{})$", pattern);
    let regex = fancy_regex::Regex::new(&decorated).map_err(|e| RegexError::Compile {
        pattern: pattern.to_string(),
        source: Box::new(e),
    })?;

    Ok(Pattern {
        source: pattern.to_string(),
        regex,
    })
}

/// Escape all regex metacharacters in `text`
pub fn escape(text: &str) -> String {
    regex::escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let p = compile("liver").unwrap();
        assert!(p.is_match("LIVER").unwrap());
        assert!(p.is_match("Liver").unwrap());
    }

    #[test]
    fn test_whole_string_match() {
        let p = compile("body").unwrap();
        assert!(p.is_match("body").unwrap());
        assert!(!p.is_match("external body").unwrap());
        assert!(!p.is_match("body_outline").unwrap());
    }

    #[test]
    fn test_alternation_is_anchored_as_unit() {
        let p = compile("left_parotid|right_parotid").unwrap();
        assert!(p.is_match("right_parotid").unwrap());
        assert!(!p.is_match("left_parotid_2").unwrap());
    }

    #[test]
    fn test_negative_lookahead() {
        let p = compile("^(?!left_parotid).*$").unwrap();
        assert!(p.is_match("right_parotid").unwrap());
        assert!(!p.is_match("left_parotid").unwrap());
    }

    #[test]
    fn test_empty_pattern_matches_only_empty() {
        let p = compile("").unwrap();
        assert!(p.is_match("").unwrap());
        assert!(!p.is_match("x").unwrap());
    }

    #[test]
    fn test_compile_error() {
        let err = compile("(unclosed").unwrap_err();
        assert!(matches!(err, RegexError::Compile { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_source_is_preserved() {
        let p = compile(".*body.*").unwrap();
        assert_eq!(p.as_str(), ".*body.*");
        assert_eq!(p.to_string(), ".*body.*");
    }

    #[test]
    fn test_escape() {
        let p = compile(&escape("a.b")).unwrap();
        assert!(p.is_match("a.b").unwrap());
        assert!(!p.is_match("axb").unwrap());
    }
}
