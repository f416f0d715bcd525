//! Function-call expression parser
//!
//! Drives the [`Scanner`] over the input, assembles [`FunctionNode`]s, and
//! parses child blocks recursively.

use crate::ast::{FunctionNode, Parameter};
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::scanner::{Event, Scanner};
use std::fmt::Write;
use tracing::{debug, trace};

/// Parse a sequence of function calls
///
/// # Errors
///
/// Any [`ParseError`] syntax error; an input without a single function call
/// gives [`ParseError::EmptyInput`].
pub fn parse_functions(
    text: &str,
    escape_char: char,
    separator_char: char,
) -> ParseResult<Vec<FunctionNode>> {
    parse_with_config(text, &ParserConfig::new(escape_char, separator_char))
}

/// Parse a sequence of function calls with an explicit configuration
pub fn parse_with_config(text: &str, config: &ParserConfig) -> ParseResult<Vec<FunctionNode>> {
    config.validate()?;
    let nodes = parse_at_depth(text, config, 0)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!("Parsed function AST:\n{}", dump(&nodes));
    }
    Ok(nodes)
}

fn parse_at_depth(text: &str, config: &ParserConfig, depth: usize) -> ParseResult<Vec<FunctionNode>> {
    trace!("Parsing '{}' at depth {}", text, depth);

    let mut scanner = Scanner::new(*config);
    let mut nodes: Vec<FunctionNode> = Vec::new();

    for c in text.chars() {
        match scanner.step(c)? {
            Some(Event::Function { name, parameters }) => {
                let parameters = parameters
                    .into_iter()
                    .map(Parameter::parse)
                    .collect::<ParseResult<Vec<_>>>()?;
                nodes.push(FunctionNode {
                    name,
                    parameters,
                    children: Vec::new(),
                });
            }
            Some(Event::Children(body)) => {
                let parent = nodes.last_mut().ok_or(ParseError::OrphanChildBlock)?;
                if parent.has_children() {
                    return Err(ParseError::DuplicateChildBlock);
                }
                if !body.is_empty() {
                    parent.children = parse_at_depth(&body, config, depth + 1)?;
                }
            }
            None => {}
        }
    }
    scanner.finish()?;

    if nodes.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(nodes)
}

/// Drop every parameter without a number, at every depth
pub fn retain_only_numeric_parameters(mut nodes: Vec<FunctionNode>) -> Vec<FunctionNode> {
    for node in &mut nodes {
        node.parameters.retain(|p| p.number.is_some());
        let children = std::mem::take(&mut node.children);
        node.children = retain_only_numeric_parameters(children);
    }
    nodes
}

fn dump(nodes: &[FunctionNode]) -> String {
    fn walk(out: &mut String, nodes: &[FunctionNode], indent: &str) {
        for node in nodes {
            let _ = writeln!(out, "{}name = '{}'", indent, node.name);
            for p in &node.parameters {
                let _ = writeln!(out, "{}  parameter: '{}'", indent, p.raw);
            }
            let _ = writeln!(out, "{}  children: {}", indent, node.children.len());
            walk(out, &node.children, &format!("{}    ", indent));
        }
    }

    let mut out = String::new();
    walk(&mut out, nodes, "");
    out
}
