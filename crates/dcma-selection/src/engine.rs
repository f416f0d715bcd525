//! Generic selector engine
//!
//! One algorithm over [`Selectable`]; the candidate sequence holds borrowed
//! entities and is only filtered or reordered, never copied. Set difference
//! (for inverted metadata selectors) uses reference identity.

use crate::ast::{Bound, Extremum, Position, Specifier};
use crate::config::{MissingKeyPolicy, SelectorOptions, Validation};
use crate::error::{SelectionError, SelectionResult};
use crate::kinds::Selectable;
use crate::parser::parse_specifier;
use dcma_regex::{compile, Pattern};
use tracing::{debug, trace};

/// Filter `candidates` with a specifier string
///
/// # Errors
///
/// [`SelectionError::InvalidSpecifier`] if any part of the specifier matches
/// no recognised form, [`SelectionError::UnsupportedIntrinsic`] if a count
/// based selector is used on a kind without sub-element counts, and
/// [`SelectionError::Regex`] for a metadata value that does not compile.
pub fn select<'a, T: Selectable>(
    candidates: Vec<&'a T>,
    specifier: &str,
    options: &SelectorOptions,
) -> SelectionResult<Vec<&'a T>> {
    let parsed = parse_specifier(specifier)?;
    apply(candidates, &parsed, options)
}

/// Filter `candidates` with an already parsed specifier
pub fn apply<'a, T: Selectable>(
    candidates: Vec<&'a T>,
    specifier: &Specifier,
    options: &SelectorOptions,
) -> SelectionResult<Vec<&'a T>> {
    let before = candidates.len();
    let selected = match specifier {
        Specifier::Composite(parts) => {
            let mut survivors = candidates;
            for part in parts {
                survivors = apply(survivors, part, options)?;
            }
            survivors
        }
        Specifier::KeyMissing { key } => candidates
            .into_iter()
            .filter(|c| !c.is_empty() && lacks_key(*c, key, options.validation))
            .collect(),
        Specifier::KeyValue {
            key,
            value,
            inverted: false,
        } => select_by_metadata(candidates, key, value, options)?,
        Specifier::KeyValue {
            key,
            value,
            inverted: true,
        } => {
            let matched = select_by_metadata(candidates.clone(), key, value, options)?;
            without(candidates, &matched)
        }
        Specifier::Position { position, inverted } => by_position(candidates, *position, *inverted),
        Specifier::Index {
            index,
            from_back,
            inverted,
        } => by_index(candidates, *index, *from_back, *inverted),
        Specifier::Extremal { extremum, inverted } => {
            by_extremum(candidates, *extremum, *inverted)?
        }
        Specifier::Threshold {
            bound,
            count,
            inverted,
        } => by_threshold(candidates, *bound, *count, *inverted)?,
    };

    trace!(
        "Selector '{}' kept {} of {} {} candidates",
        specifier,
        selected.len(),
        before,
        T::KIND
    );
    Ok(selected)
}

/// Keep candidates whose metadata value for `key` matches `value_regex`
pub fn select_by_metadata<'a, T: Selectable>(
    candidates: Vec<&'a T>,
    key: &str,
    value_regex: &str,
    options: &SelectorOptions,
) -> SelectionResult<Vec<&'a T>> {
    let pattern = compile(value_regex)?;
    let mut selected = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if keep_by_metadata(candidate, key, &pattern, options)? {
            selected.push(candidate);
        }
    }
    Ok(selected)
}

/// Apply several key/value filters in sequence
pub fn select_by_metadata_pairs<'a, T, I, K, V>(
    candidates: Vec<&'a T>,
    pairs: I,
    options: &SelectorOptions,
) -> SelectionResult<Vec<&'a T>>
where
    T: Selectable,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut survivors = candidates;
    for (key, value) in pairs {
        survivors = select_by_metadata(survivors, key.as_ref(), value.as_ref(), options)?;
    }
    Ok(survivors)
}

fn keep_by_metadata<T: Selectable>(
    candidate: &T,
    key: &str,
    pattern: &Pattern,
    options: &SelectorOptions,
) -> SelectionResult<bool> {
    if candidate.is_empty() {
        return Ok(false);
    }

    match options.validation {
        Validation::Representative => match candidate.metadata_value(key) {
            Some(value) => Ok(pattern.is_match(value)?),
            None => when_absent(pattern, options.nas),
        },
        Validation::Pedantic => {
            let values = candidate.distinct_metadata_values(key);
            if values.is_empty() {
                return when_absent(pattern, options.nas);
            }
            for value in values {
                if !pattern.is_match(value)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

fn when_absent(pattern: &Pattern, nas: MissingKeyPolicy) -> SelectionResult<bool> {
    match nas {
        MissingKeyPolicy::Include => Ok(true),
        MissingKeyPolicy::Exclude => Ok(false),
        MissingKeyPolicy::TreatAsEmpty => Ok(pattern.is_match("")?),
    }
}

/// A present key never matches; an absent key is included.
fn lacks_key<T: Selectable>(candidate: &T, key: &str, validation: Validation) -> bool {
    match validation {
        Validation::Representative => candidate.metadata_value(key).is_none(),
        Validation::Pedantic => candidate.distinct_metadata_values(key).is_empty(),
    }
}

fn without<'a, T>(candidates: Vec<&'a T>, removed: &[&'a T]) -> Vec<&'a T> {
    candidates
        .into_iter()
        .filter(|c| !removed.iter().any(|r| std::ptr::eq(*c, *r)))
        .collect()
}

/// Keep (or drop, when inverted) the element at zero-based `n`
fn nth<T>(mut candidates: Vec<&T>, n: usize, inverted: bool) -> Vec<&T> {
    match (n < candidates.len(), inverted) {
        (true, false) => vec![candidates[n]],
        (true, true) => {
            candidates.remove(n);
            candidates
        }
        (false, false) => Vec::new(),
        (false, true) => candidates,
    }
}

fn by_position<T>(mut candidates: Vec<&T>, position: Position, inverted: bool) -> Vec<&T> {
    match position {
        Position::None if inverted => candidates,
        Position::None => Vec::new(),
        Position::All if inverted => Vec::new(),
        Position::All => candidates,
        Position::Last if inverted => {
            candidates.pop();
            candidates
        }
        Position::Last => candidates.pop().into_iter().collect(),
        Position::First => nth(candidates, 0, inverted),
        Position::Second => nth(candidates, 1, inverted),
        Position::Third => nth(candidates, 2, inverted),
    }
}

fn by_index<T>(candidates: Vec<&T>, index: usize, from_back: bool, inverted: bool) -> Vec<&T> {
    if !from_back {
        return nth(candidates, index, inverted);
    }
    match index
        .checked_add(1)
        .and_then(|k| candidates.len().checked_sub(k))
    {
        Some(n) => nth(candidates, n, inverted),
        None if inverted => candidates,
        None => Vec::new(),
    }
}

fn counts<T: Selectable>(candidates: &[&T]) -> SelectionResult<Vec<usize>> {
    candidates
        .iter()
        .map(|c| {
            c.sub_element_count()
                .ok_or(SelectionError::UnsupportedIntrinsic { kind: T::KIND })
        })
        .collect()
}

fn by_extremum<'a, T: Selectable>(
    mut candidates: Vec<&'a T>,
    extremum: Extremum,
    inverted: bool,
) -> SelectionResult<Vec<&'a T>> {
    if candidates.is_empty() {
        return Ok(candidates);
    }

    let counts = counts(&candidates)?;
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate().skip(1) {
        let better = match extremum {
            Extremum::Numerous => count > counts[best],
            Extremum::Fewest => count < counts[best],
        };
        if better {
            best = i;
        }
    }
    debug!(
        "Selected {} {} #{} with {} {}",
        extremum.as_str(),
        T::KIND,
        best,
        counts[best],
        T::KIND.sub_element_label()
    );

    if inverted {
        candidates.remove(best);
        Ok(candidates)
    } else {
        Ok(vec![candidates[best]])
    }
}

fn by_threshold<'a, T: Selectable>(
    candidates: Vec<&'a T>,
    bound: Bound,
    threshold: i64,
    inverted: bool,
) -> SelectionResult<Vec<&'a T>> {
    let counts = counts(&candidates)?;
    Ok(candidates
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| bound.evaluate(*count, threshold) != inverted)
        .map(|(c, _)| c)
        .collect())
}
