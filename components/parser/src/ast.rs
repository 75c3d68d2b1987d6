//! Abstract syntax tree and pretty-printer.
//!
//! Nodes are constructed bottom-up during parsing and are immutable once
//! returned; the whole tree is owned by the caller of the parse entry
//! point and contains no cycles.
//!
//! A node renders as `Kind(child1 child2 … childN)` with children
//! separated by single spaces. Token children render as their raw source
//! text; string, regex, and template payloads keep their quotes,
//! delimiters, and `${ … }` hole markers verbatim. The top-level
//! rendering is the concatenation of all top-level `Stmt(…)` renderings
//! separated by single spaces.

use crate::grammar::GrammarKind;
use serde::Serialize;
use std::fmt;

/// A single child of an AST node: either a raw token payload or a
/// nested node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Child {
    /// A leaf token payload, rendered verbatim
    Token(String),
    /// A nested node
    Node(Node),
}

/// An AST node: a grammar kind and an ordered sequence of children.
///
/// Every parenthetical, bracket, and brace group opened inside a node
/// is balanced inside that same node's children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// The grammatical class of this node
    pub kind: GrammarKind,
    /// Ordered children, each a token payload or a nested node
    pub children: Vec<Child>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: GrammarKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Append a raw token payload.
    pub fn push_token(&mut self, text: impl Into<String>) {
        self.children.push(Child::Token(text.into()));
    }

    /// Append a nested node.
    pub fn push_node(&mut self, node: Node) {
        self.children.push(Child::Node(node));
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match child {
                Child::Token(text) => f.write_str(text)?,
                Child::Node(node) => write!(f, "{}", node)?,
            }
        }
        f.write_str(")")
    }
}

/// A parsed program: the sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ast {
    /// Top-level statements in source order
    pub statements: Vec<Node>,
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_renders_bare_parens() {
        let node = Node::new(GrammarKind::Stmt);
        assert_eq!(node.to_string(), "Stmt()");
    }

    #[test]
    fn test_tokens_join_with_single_spaces() {
        let mut node = Node::new(GrammarKind::Stmt);
        node.push_token("{");
        node.push_token("}");
        assert_eq!(node.to_string(), "Stmt({ })");
    }

    #[test]
    fn test_nested_nodes_render_inline() {
        let mut inner = Node::new(GrammarKind::Expr);
        inner.push_token("b");
        let mut binding = Node::new(GrammarKind::Binding);
        binding.push_token("a");
        binding.push_token("=");
        binding.push_node(inner);
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("var");
        stmt.push_node(binding);
        assert_eq!(stmt.to_string(), "Stmt(var Binding(a = Expr(b)))");
    }

    #[test]
    fn test_ast_joins_statements_with_spaces() {
        let mut a = Node::new(GrammarKind::Stmt);
        a.push_token("return");
        let mut e = Node::new(GrammarKind::Expr);
        e.push_token("a");
        let mut b = Node::new(GrammarKind::Stmt);
        b.push_node(e);
        let ast = Ast {
            statements: vec![a, b],
        };
        assert_eq!(ast.to_string(), "Stmt(return) Stmt(Expr(a))");
    }

    #[test]
    fn test_empty_program_renders_empty() {
        let ast = Ast { statements: vec![] };
        assert_eq!(ast.to_string(), "");
    }
}
