//! Specifier grammar parser using nom
//!
//! Grammar (all words case-insensitive):
//! ```text
//! specifier  := part (';' part)*
//! part       := 'keymissing' '@' key
//!             | '!'? key '@' value
//!             | '!'? position
//!             | '!'? '#' '-'? digits
//!             | '!'? extremum
//!             | '!'? bound '(' '-'? digits ')'
//! position   := no[ne] | a[ll] | fi[rst] | s[econd] | t[hird] | l[ast]
//! extremum   := nu[merous] | fewes[t]
//! bound      := mo[re] [-_]? t?h?[ae]?n? [-_]?
//!             | fewer [-_]? t?h?[ae]?n? [-_]?
//! ```
//!
//! Bracketed letters are individually optional, so `fi`, `fit` and `first`
//! all name the first candidate. An index too large for `usize` is treated as
//! out of range.

use crate::ast::*;
use crate::error::{SelectionError, SelectionResult};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

type Res<'a, O> = IResult<&'a str, O>;

/// Parse a full specifier string
///
/// Strings containing `;` become a [`Specifier::Composite`].
pub fn parse_specifier(text: &str) -> SelectionResult<Specifier> {
    if text.contains(';') {
        let parts = text
            .split(';')
            .map(parse_part)
            .collect::<SelectionResult<Vec<_>>>()?;
        return Ok(Specifier::Composite(parts));
    }
    parse_part(text)
}

/// Classify a single sub-specifier (no `;`)
fn parse_part(text: &str) -> SelectionResult<Specifier> {
    let fields: Vec<&str> = text.split('@').collect();
    let parsed = if let [key, value] = fields.as_slice() {
        if key.eq_ignore_ascii_case("keymissing") {
            Specifier::KeyMissing {
                key: value.to_string(),
            }
        } else if let Some(key) = key.strip_prefix('!') {
            Specifier::KeyValue {
                key: key.to_string(),
                value: value.to_string(),
                inverted: true,
            }
        } else {
            Specifier::KeyValue {
                key: key.to_string(),
                value: value.to_string(),
                inverted: false,
            }
        }
    } else {
        match word(text) {
            Ok((_, parsed)) => parsed,
            Err(_) => return Err(SelectionError::InvalidSpecifier(text.to_string())),
        }
    };

    trace!("Classified '{}' as {:?}", text, parsed);
    Ok(parsed)
}

/// Positional, indexed, and intrinsic forms
fn word(input: &str) -> Res<'_, Specifier> {
    alt((
        all_consuming(map(pair(inverted, position), |(inverted, position)| {
            Specifier::Position { position, inverted }
        })),
        all_consuming(map(pair(inverted, index), |(inverted, (from_back, index))| {
            Specifier::Index {
                index,
                from_back,
                inverted,
            }
        })),
        all_consuming(map(pair(inverted, extremum), |(inverted, extremum)| {
            Specifier::Extremal { extremum, inverted }
        })),
        all_consuming(map(
            tuple((inverted, bound, threshold)),
            |(inverted, bound, count)| Specifier::Threshold {
                bound,
                count,
                inverted,
            },
        )),
    ))(input)
}

fn inverted(input: &str) -> Res<'_, bool> {
    map(opt(char('!')), |bang| bang.is_some())(input)
}

fn char_no_case<'a>(c: char) -> impl FnMut(&'a str) -> Res<'a, char> {
    satisfy(move |x: char| x.eq_ignore_ascii_case(&c))
}

/// A required prefix followed by individually optional letters
fn fuzzy<'a>(input: &'a str, required: &str, optional: &str) -> Res<'a, ()> {
    let (mut rest, _) = tag_no_case(required)(input)?;
    for c in optional.chars() {
        let (next, _) = opt(char_no_case(c))(rest)?;
        rest = next;
    }
    Ok((rest, ()))
}

fn position(input: &str) -> Res<'_, Position> {
    alt((
        value(Position::None, |i| fuzzy(i, "no", "ne")),
        value(Position::All, |i| fuzzy(i, "a", "ll")),
        value(Position::First, |i| fuzzy(i, "fi", "rst")),
        value(Position::Second, |i| fuzzy(i, "s", "econd")),
        value(Position::Third, |i| fuzzy(i, "t", "hird")),
        value(Position::Last, |i| fuzzy(i, "l", "ast")),
    ))(input)
}

/// `#N` or `#-N`, returning `(from_back, N)`
///
/// `N` saturates at `usize::MAX`, so a huge index is out of range rather than
/// malformed.
fn index(input: &str) -> Res<'_, (bool, usize)> {
    preceded(
        char('#'),
        pair(
            map(opt(char('-')), |minus| minus.is_some()),
            map(digit1, |digits: &str| digits.parse().unwrap_or(usize::MAX)),
        ),
    )(input)
}

fn extremum(input: &str) -> Res<'_, Extremum> {
    alt((
        value(Extremum::Numerous, |i| fuzzy(i, "nu", "merous")),
        value(Extremum::Fewest, |i| fuzzy(i, "fewes", "t")),
    ))(input)
}

fn separator(input: &str) -> Res<'_, Option<char>> {
    opt(one_of("-_"))(input)
}

/// The loosely spelled "than" between a bound word and its argument
fn than(input: &str) -> Res<'_, ()> {
    let (input, _) = separator(input)?;
    let (input, _) = opt(char_no_case('t'))(input)?;
    let (input, _) = opt(char_no_case('h'))(input)?;
    let (input, _) = opt(one_of("aeAE"))(input)?;
    let (input, _) = opt(char_no_case('n'))(input)?;
    let (input, _) = separator(input)?;
    Ok((input, ()))
}

fn bound(input: &str) -> Res<'_, Bound> {
    alt((
        value(Bound::MoreThan, pair(|i| fuzzy(i, "mo", "re"), than)),
        value(Bound::FewerThan, pair(tag_no_case("fewer"), than)),
    ))(input)
}

fn threshold(input: &str) -> Res<'_, i64> {
    delimited(
        char('('),
        map_res(recognize(pair(opt(char('-')), digit1)), i64::from_str),
        char(')'),
    )(input)
}

impl Specifier {
    /// Parse a specifier string, see [`parse_specifier`]
    pub fn parse(text: &str) -> SelectionResult<Self> {
        parse_specifier(text)
    }
}

impl FromStr for Specifier {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_specifier(s)
    }
}

/// A specifier string split into the parts applied in sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecifierList(pub Vec<Specifier>);

impl SpecifierList {
    /// Parse each `;`-separated part of `text`
    pub fn parse(text: &str) -> SelectionResult<Self> {
        text.split(';')
            .map(parse_part)
            .collect::<SelectionResult<Vec<_>>>()
            .map(SpecifierList)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Specifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SpecifierList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl From<SpecifierList> for Specifier {
    fn from(list: SpecifierList) -> Self {
        let mut parts = list.0;
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Specifier::Composite(parts)
        }
    }
}
