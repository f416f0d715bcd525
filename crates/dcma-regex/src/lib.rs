//! dcma-regex - Regex compilation and keyword disambiguation
//!
//! Every user-supplied pattern in the query sublanguages goes through
//! [`compile`], which applies the application-wide flags:
//!
//! - case-insensitive matching
//! - whole-string (anchored) matching, like `std::regex_match`
//! - a backtracking engine with look-around, so `^(?!xyz).*$` works
//!
//! [`RegexGroup`] builds abbreviation-tolerant patterns for a vocabulary of
//! keywords (e.g. the method names accepted by one operation) while keeping
//! every pair of keywords mutually exclusive.
//!
//! # Examples
//!
//! ```
//! use dcma_regex::{compile, RegexGroup};
//!
//! let pattern = compile("body|liver").unwrap();
//! assert!(pattern.is_match("Liver").unwrap());
//! assert!(!pattern.is_match("liver_left").unwrap());
//!
//! let mut group = RegexGroup::new();
//! group.insert("gaussian").unwrap();
//! group.insert("box").unwrap();
//! assert!(group.matches("gauss", "gaussian").unwrap());
//! ```

pub mod compile;
pub mod config;
pub mod error;
pub mod group;

pub use compile::*;
pub use config::*;
pub use error::*;
pub use group::*;
