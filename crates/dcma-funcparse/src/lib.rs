//! dcma-funcparse - Function-call expressions for configuring operations
//!
//! Operations and their nested sub-operations are written as a sequence of
//! function calls:
//!
//! ```text
//! f1(x, "arg, text\, or \"escaped\" sequence", 1.23); f2('tex\t', 2.\34)
//! parent(x, y){ child1(a, b); child2(c) }
//! ```
//!
//! - Parameters are separated by `,`; surrounding whitespace is trimmed and
//!   empty parameters are dropped, so a trailing comma is harmless.
//! - `'...'` and `"..."` quote a parameter; the escape character only has an
//!   effect inside quotes.
//! - `[` ... `]` may be used instead of `(` ... `)`.
//! - A `{ ... }` block after a call holds its children and is parsed
//!   recursively.
//! - Each parameter is inspected for a leading number and a trailing `x`
//!   (fraction) or `%` (percentage) suffix.
//!
//! # Examples
//!
//! ```
//! use dcma_funcparse::parse_functions;
//!
//! let nodes = parse_functions("blur(50%, 'gaussian'){ crop(0.1x) }", '\\', ';').unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].name, "blur");
//! assert!(nodes[0].parameters[0].is_percentage);
//! assert_eq!(nodes[0].children[0].parameters[0].number, Some(0.1));
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod strings;

pub use ast::*;
pub use config::*;
pub use error::*;
pub use parser::*;
pub use strings::*;
