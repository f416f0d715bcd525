//! Abstract syntax for selector specifiers
//!
//! A specifier string is parsed into a [`Specifier`]; the engine then applies
//! it to a candidate sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified selector specifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specifier {
    /// Several specifiers applied in order, each to the previous survivors
    Composite(Vec<Specifier>),

    /// Keep candidates lacking the metadata key
    KeyMissing { key: String },

    /// Keep candidates whose metadata value for `key` matches the regex
    KeyValue {
        key: String,
        value: String,
        inverted: bool,
    },

    /// A literal position (`first`, `last`, ...)
    Position { position: Position, inverted: bool },

    /// Zero-based index from the front (`#N`) or back (`#-N`)
    Index {
        index: usize,
        from_back: bool,
        inverted: bool,
    },

    /// The candidate with the most or fewest sub-elements
    Extremal { extremum: Extremum, inverted: bool },

    /// Candidates with strictly more or fewer sub-elements than a threshold
    Threshold {
        bound: Bound,
        count: i64,
        inverted: bool,
    },
}

impl Specifier {
    /// Check if this specifier relies on sub-element counts
    pub fn is_intrinsic(&self) -> bool {
        match self {
            Specifier::Extremal { .. } | Specifier::Threshold { .. } => true,
            Specifier::Composite(parts) => parts.iter().any(Specifier::is_intrinsic),
            _ => false,
        }
    }

    /// Check if this specifier inspects metadata
    pub fn is_metadata(&self) -> bool {
        match self {
            Specifier::KeyMissing { .. } | Specifier::KeyValue { .. } => true,
            Specifier::Composite(parts) => parts.iter().any(Specifier::is_metadata),
            _ => false,
        }
    }
}

/// Literal positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    None,
    All,
    First,
    Second,
    Third,
    Last,
}

impl Position {
    /// One-based ordinal for `first`/`second`/`third`
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Position::First => Some(1),
            Position::Second => Some(2),
            Position::Third => Some(3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::None => "none",
            Position::All => "all",
            Position::First => "first",
            Position::Second => "second",
            Position::Third => "third",
            Position::Last => "last",
        }
    }
}

/// Which extreme an extremal selector picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extremum {
    /// Greatest number of sub-elements
    Numerous,
    /// Fewest sub-elements
    Fewest,
}

impl Extremum {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extremum::Numerous => "numerous",
            Extremum::Fewest => "fewest",
        }
    }
}

/// Direction of a threshold selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    MoreThan,
    FewerThan,
}

impl Bound {
    /// Evaluate the strict comparison for a sub-element count
    pub fn evaluate(&self, count: usize, threshold: i64) -> bool {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        match self {
            Bound::MoreThan => threshold < count,
            Bound::FewerThan => count < threshold,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bound::MoreThan => "more-than",
            Bound::FewerThan => "fewer-than",
        }
    }
}

fn bang(inverted: bool) -> &'static str {
    if inverted {
        "!"
    } else {
        ""
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Composite(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i != 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Specifier::KeyMissing { key } => write!(f, "keymissing@{}", key),
            Specifier::KeyValue {
                key,
                value,
                inverted,
            } => write!(f, "{}{}@{}", bang(*inverted), key, value),
            Specifier::Position { position, inverted } => {
                write!(f, "{}{}", bang(*inverted), position.as_str())
            }
            Specifier::Index {
                index,
                from_back,
                inverted,
            } => {
                let sign = if *from_back { "-" } else { "" };
                write!(f, "{}#{}{}", bang(*inverted), sign, index)
            }
            Specifier::Extremal { extremum, inverted } => {
                write!(f, "{}{}", bang(*inverted), extremum.as_str())
            }
            Specifier::Threshold {
                bound,
                count,
                inverted,
            } => write!(f, "{}{}({})", bang(*inverted), bound.as_str(), count),
        }
    }
}
