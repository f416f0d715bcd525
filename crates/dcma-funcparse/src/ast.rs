//! Parsed function-call nodes

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::strings::leading_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parameter of a function call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Text as written, trimmed and with quotes and escapes resolved
    pub raw: String,
    /// Leading number extracted from `raw`, ignoring any suffix
    pub number: Option<f64>,
    /// `raw` ends in `x`
    pub is_fractional: bool,
    /// `raw` ends in `%`
    pub is_percentage: bool,
}

impl Parameter {
    /// Inspect raw parameter text for a number and suffix
    pub fn parse(raw: impl Into<String>) -> ParseResult<Self> {
        let raw = raw.into();
        let last = raw.len().checked_sub(1);
        let is_fractional = last.is_some() && raw.find('x') == last;
        let is_percentage = last.is_some() && raw.find('%') == last;
        if is_fractional && is_percentage {
            return Err(ParseError::AmbiguousSuffix(raw));
        }

        Ok(Self {
            number: leading_number(&raw),
            raw,
            is_fractional,
            is_percentage,
        })
    }

    /// The number as a fraction of one: `50%` and `0.5x` both give 0.5
    pub fn as_fraction(&self) -> Option<f64> {
        let number = self.number?;
        if self.is_percentage {
            Some(number / 100.0)
        } else {
            Some(number)
        }
    }
}

/// A function call with its parameters and nested children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionNode {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Empty when the call had no child block
    pub children: Vec<FunctionNode>,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Numbers of all parameters that have one, in order
    pub fn numbers(&self) -> Vec<f64> {
        self.parameters.iter().filter_map(|p| p.number).collect()
    }

    /// Render in the textual form accepted by the parser
    ///
    /// Every parameter is quoted, so the output parses back to the same tree.
    pub fn render(&self, config: &ParserConfig) -> String {
        let mut out = String::new();
        self.render_into(&mut out, config);
        out
    }

    fn render_into(&self, out: &mut String, config: &ParserConfig) {
        out.push_str(&self.name);
        out.push('(');
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i != 0 {
                out.push_str(", ");
            }
            out.push('"');
            for c in parameter.raw.chars() {
                if c == '"' || c == config.escape_char {
                    out.push(config.escape_char);
                }
                out.push(c);
            }
            out.push('"');
        }
        out.push(')');

        if self.has_children() {
            out.push_str("{ ");
            for (i, child) in self.children.iter().enumerate() {
                if i != 0 {
                    out.push(config.separator_char);
                    out.push(' ');
                }
                child.render_into(out, config);
            }
            out.push_str(" }");
        }
    }
}

impl fmt::Display for FunctionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ParserConfig::default()))
    }
}
