//! Character-level state machine for function-call expressions
//!
//! The scanner consumes one character at a time and reports completed
//! function calls and captured child blocks as [`Event`]s. Its state is the
//! pair of stacks `quote_stack` and `paren_stack` plus a text buffer; the
//! current [`Mode`] is derived from the stacks.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};

/// Scanning mode derived from the quote and parenthesis stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Between statements, accumulating a function name
    Outside,
    /// Inside `(...)` or `[...]`
    Arguments,
    /// Inside a quoted parameter
    Quoted,
    /// Inside a `{...}` child block, capturing text for a recursive parse
    ChildBlock,
}

/// Something the scanner has completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A function call closed its parameter list
    Function {
        name: String,
        parameters: Vec<String>,
    },
    /// A top-level child block closed; holds the trimmed inner text
    Children(String),
}

/// Incremental scanner for one nesting level
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ParserConfig,
    quote_stack: Vec<char>,
    paren_stack: Vec<char>,
    buffer: String,
    escaped: bool,
    separated: bool,
    name: Option<String>,
    parameters: Vec<String>,
}

/// Keep only alphanumerics and underscores
fn clean_name(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

impl Scanner {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            quote_stack: Vec::new(),
            paren_stack: Vec::new(),
            buffer: String::new(),
            escaped: false,
            separated: false,
            name: None,
            parameters: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.paren_stack.first() == Some(&'}') {
            Mode::ChildBlock
        } else if !self.quote_stack.is_empty() {
            Mode::Quoted
        } else if matches!(self.paren_stack.last(), Some(')') | Some(']')) {
            Mode::Arguments
        } else {
            Mode::Outside
        }
    }

    pub fn quote_stack(&self) -> &[char] {
        &self.quote_stack
    }

    pub fn paren_stack(&self) -> &[char] {
        &self.paren_stack
    }

    /// Text accumulated since the last transition
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Consume one character
    pub fn step(&mut self, c: char) -> ParseResult<Option<Event>> {
        if self.escaped {
            self.escaped = false;
            self.buffer.push(c);
            return Ok(None);
        }

        match self.mode() {
            Mode::ChildBlock => Ok(self.child_block(c)),
            Mode::Quoted => {
                self.quoted(c);
                Ok(None)
            }
            Mode::Arguments => Ok(self.arguments(c)),
            Mode::Outside => self.outside(c).map(|_| None),
        }
    }

    /// Check that the input ended on a statement boundary
    pub fn finish(self) -> ParseResult<()> {
        if self.escaped {
            return Err(ParseError::DanglingEscape);
        }
        if !self.quote_stack.is_empty() {
            return Err(ParseError::UnterminatedQuote);
        }
        if !self.paren_stack.is_empty() {
            return Err(ParseError::UnbalancedParenthesis);
        }
        if let Some(name) = self.name {
            return Err(ParseError::IncompleteFunction(name));
        }
        let trailing = self.buffer.trim();
        if !trailing.is_empty() {
            return Err(ParseError::IncompleteFunction(trailing.to_string()));
        }
        Ok(())
    }

    /// Quotes and escapes are kept verbatim for the recursive parse.
    fn child_block(&mut self, c: char) -> Option<Event> {
        if let Some(&close) = self.quote_stack.last() {
            self.buffer.push(c);
            if c == self.config.escape_char {
                self.escaped = true;
            } else if c == close {
                self.quote_stack.pop();
            }
            return None;
        }

        match c {
            '\'' | '"' => {
                self.quote_stack.push(c);
                self.buffer.push(c);
            }
            '{' => {
                self.paren_stack.push('}');
                self.buffer.push(c);
            }
            '}' => {
                self.paren_stack.pop();
                if self.paren_stack.is_empty() {
                    let body = self.buffer.trim().to_string();
                    self.buffer.clear();
                    return Some(Event::Children(body));
                }
                self.buffer.push(c);
            }
            _ => self.buffer.push(c),
        }
        None
    }

    /// The closing quote is discarded; escapes pass the next character.
    fn quoted(&mut self, c: char) {
        if c == self.config.escape_char {
            self.escaped = true;
        } else if self.quote_stack.last() == Some(&c) {
            self.quote_stack.pop();
        } else {
            self.buffer.push(c);
        }
    }

    fn arguments(&mut self, c: char) -> Option<Event> {
        match c {
            '\'' | '"' => {
                self.quote_stack.push(c);
                None
            }
            ',' => {
                self.finish_parameter();
                None
            }
            _ if self.paren_stack.last() == Some(&c) => {
                self.finish_parameter();
                self.paren_stack.pop();
                self.separated = false;
                Some(Event::Function {
                    name: self.name.take().unwrap_or_default(),
                    parameters: std::mem::take(&mut self.parameters),
                })
            }
            _ => {
                self.buffer.push(c);
                None
            }
        }
    }

    /// Empty parameters are dropped, which allows a trailing comma.
    fn finish_parameter(&mut self) {
        let parameter = self.buffer.trim();
        if !parameter.is_empty() {
            self.parameters.push(parameter.to_string());
        }
        self.buffer.clear();
    }

    fn outside(&mut self, c: char) -> ParseResult<()> {
        match c {
            '(' | '[' => {
                self.paren_stack.push(if c == '(' { ')' } else { ']' });
                let name = clean_name(&self.buffer);
                self.buffer.clear();
                if name.is_empty() {
                    return Err(ParseError::EmptyFunctionName);
                }
                if let Some(existing) = &self.name {
                    return Err(ParseError::DuplicateFunctionName(existing.clone()));
                }
                self.name = Some(name);
            }
            // A child block belongs to the statement directly before it.
            '{' => {
                self.reject_stray_text()?;
                if self.separated {
                    return Err(ParseError::OrphanChildBlock);
                }
                self.paren_stack.push('}');
            }
            _ if c == self.config.separator_char => {
                self.reject_stray_text()?;
                self.separated = true;
            }
            _ => self.buffer.push(c),
        }
        Ok(())
    }

    fn reject_stray_text(&mut self) -> ParseResult<()> {
        let stray = self.buffer.trim();
        if !stray.is_empty() {
            return Err(ParseError::StrayText(stray.to_string()));
        }
        self.buffer.clear();
        Ok(())
    }
}
