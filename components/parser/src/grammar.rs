//! Grammar classifier for AST nodes.
//!
//! Every node carries exactly one [`GrammarKind`]. The kind is used by
//! the pretty-printer and for debuggability; it informs no parsing
//! decisions.

use serde::Serialize;
use std::fmt;

/// The grammatical class of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrammarKind {
    /// A statement or declaration
    Stmt,
    /// An expression
    Expr,
    /// A binding target in a declaration or parameter list
    Binding,
    /// A `case`/`default` clause of a `switch` statement
    Clause,
    /// A method definition in a class body or object literal
    Method,
}

impl GrammarKind {
    /// The textual name used by the pretty-printer.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammarKind::Stmt => "Stmt",
            GrammarKind::Expr => "Expr",
            GrammarKind::Binding => "Binding",
            GrammarKind::Clause => "Clause",
            GrammarKind::Method => "Method",
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
