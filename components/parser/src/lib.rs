//! JavaScript Parser Component
//!
//! Provides a lexer and recursive descent parser for JavaScript source
//! text, producing an inspectable AST whose textual rendering is a
//! deterministic, whitespace-normalized reflection of the program's
//! grammatical structure.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes JavaScript source code
//! - [`Token`] - Token kinds including identifiers, literals, keywords
//! - [`GrammarKind`] - The five-way grammar classifier for AST nodes
//! - [`Node`] / [`Ast`] - The node tree and its pretty-printer
//! - [`Parser`] - Recursive descent parser producing the AST
//!
//! # Example
//!
//! ```
//! let ast = parser::parse("let x = 42;").unwrap();
//! assert_eq!(ast.to_string(), "Stmt(let Binding(x = Expr(42)))");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use ast::{Ast, Child, Node};
pub use grammar::GrammarKind;
pub use lexer::{Keyword, Lexer, Punctuator, Token};
pub use parser::Parser;

use core_types::SyntaxError;

/// Parse JavaScript source text into an AST.
///
/// Any grammar error is fatal for the parse; the partial tree is
/// discarded and the error carries the offending token and the
/// grammatical context in which recovery failed.
pub fn parse(source: &str) -> Result<Ast, SyntaxError> {
    Parser::new(source).parse()
}

/// Parse a raw byte source.
///
/// The syntax is ASCII-significant; the bytes must nevertheless form
/// valid UTF-8, and invalid input surfaces as a lexical error.
pub fn parse_bytes(source: &[u8]) -> Result<Ast, SyntaxError> {
    let text = std::str::from_utf8(source)
        .map_err(|_| SyntaxError::new("invalid UTF-8 in source input", None))?;
    parse(text)
}
