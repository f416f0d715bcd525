//! Small string helpers shared by the parser and its callers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"(?i)^\s*[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?|inf(?:inity)?|nan)"
    )
    .unwrap();
}

/// The longest leading floating-point number in `text`, if any
///
/// Leading whitespace is skipped and trailing text is ignored, so `"1.5x"`
/// yields 1.5 and `"abc"` yields nothing.
pub fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
}

/// Split `text` on any of `split_chars` and collect every token that starts
/// with a number
pub fn parse_numbers(split_chars: &str, text: &str) -> Vec<f64> {
    text.split(|c: char| split_chars.contains(c))
        .filter(|token| !token.is_empty())
        .filter_map(leading_number)
        .collect()
}

/// Strip characters that would break a quoted string
///
/// Control characters (including newlines) and both kinds of quote are
/// removed so the result can be embedded in either `'...'` or `"..."`. This
/// does not protect against shell expansion.
pub fn escape_for_quotes(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() && *c != '\'' && *c != '"')
        .collect()
}
