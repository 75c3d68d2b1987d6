//! Recursive descent parser for JavaScript.
//!
//! The parser owns one lexer and advances it strictly left to right,
//! driving the lexer's regex/division mode before every token. It
//! performs automatic semicolon insertion, resolves contextual-keyword
//! ambiguity (`async`, `await`, `yield`, `of`, `from`, `as`, `get`,
//! `set`, `static`, `target`), and recognizes destructuring binding
//! patterns and arrow parameter lists through permissive cover grammars.
//!
//! Statement termination is permissive: a `;` is consumed when present,
//! and an expression statement otherwise ends as soon as its expression
//! cannot be extended. Line terminators only gate the restricted
//! productions (`return`/`break`/`continue`/`yield` operands, `throw`,
//! and the token before `=>`).

use crate::ast::{Ast, Node};
use crate::error::{expected_token, unexpected_token};
use crate::grammar::GrammarKind;
use crate::lexer::{token_ends_expression, Keyword, Lexer, Punctuator, Token};
use core_types::{SourcePosition, SyntaxError};

/// Sequence expressions: `a, b`.
const PREC_COMMA: u8 = 1;
/// Assignment expressions, the default level for list elements,
/// initializers, and operands of `yield`.
const PREC_ASSIGN: u8 = 2;
/// Unary operators (`delete`, `typeof`, `void`, `!`, `~`, `+`, `-`,
/// `++`, `--`, `await`).
const PREC_UNARY: u8 = 14;
/// Left-hand-side expressions: member access, calls, `new`, tagged
/// templates. `extends` heads parse at this level.
const PREC_LHS: u8 = 15;

/// Accessor form of a method head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accessor {
    None,
    Get,
    Set,
}

/// JavaScript parser producing the inspectable AST.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    cur: Token,
    /// Whether a line terminator preceded the current token
    prev_lt: bool,
    /// Whether `await` is a keyword here (inside an async function body)
    in_async: bool,
    /// Whether `in` is an operator here (false inside a `for` head init)
    no_in: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            cur: Token::Eof,
            prev_lt: false,
            in_async: false,
            no_in: false,
        }
    }

    /// Parse the source into an AST.
    ///
    /// The first grammar or lexical error aborts the parse.
    pub fn parse(&mut self) -> Result<Ast, SyntaxError> {
        self.advance()?;
        let mut statements = Vec::new();
        while !self.cur.is_eof() {
            statements.push(self.parse_statement()?);
        }
        Ok(Ast { statements })
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    fn pos(&self) -> Option<SourcePosition> {
        Some(self.lexer.position())
    }

    /// Whether the current token can end a primary expression, which
    /// decides the regex/division mode for the next `/`.
    ///
    /// `yield` never ends an expression (it is a prefix keyword in every
    /// operand position), and `await` only ends one outside async bodies.
    fn ends_expression(&self) -> bool {
        match &self.cur {
            Token::Identifier(name) if name == "yield" => false,
            Token::Identifier(name) if name == "await" => !self.in_async,
            other => token_ends_expression(other),
        }
    }

    /// Advance to the next token, scanning a leading `/` per the
    /// default regex/division table.
    fn advance(&mut self) -> Result<(), SyntaxError> {
        let regex = !self.ends_expression();
        self.advance_mode(regex)
    }

    /// Advance with an explicit regex/division override. `regex = true`
    /// after the `)` of a control-structure head; `regex = false` after
    /// the `}` closing a function/class expression or object literal.
    fn advance_mode(&mut self, regex: bool) -> Result<(), SyntaxError> {
        self.lexer.set_regex_mode(regex);
        self.cur = self.lexer.next()?;
        self.prev_lt = self.lexer.line_terminator_before();
        Ok(())
    }

    fn is_punct(&self, p: Punctuator) -> bool {
        matches!(&self.cur, Token::Punctuator(q) if *q == p)
    }

    fn is_keyword(&self, k: Keyword) -> bool {
        matches!(&self.cur, Token::Keyword(q) if *q == k)
    }

    fn is_ident(&self, name: &str) -> bool {
        matches!(&self.cur, Token::Identifier(s) if s == name)
    }

    /// The current token's text when it is an identifier or a keyword.
    fn word(&self) -> Option<String> {
        match &self.cur {
            Token::Identifier(s) => Some(s.clone()),
            Token::Keyword(k) => Some(k.as_str().to_string()),
            _ => None,
        }
    }

    /// Consume a `;` if one is present. Its absence is never an error;
    /// an expression statement simply ends when its expression can no
    /// longer be extended.
    fn eat_semicolon(&mut self) -> Result<(), SyntaxError> {
        if self.is_punct(Punctuator::Semicolon) {
            self.advance()?;
        }
        Ok(())
    }

    /// Whether the current token can begin an expression. Used to decide
    /// whether restricted productions take an operand.
    fn can_start_expression(&self) -> bool {
        match &self.cur {
            Token::Identifier(_)
            | Token::String(_)
            | Token::Numeric(_)
            | Token::Regex(_)
            | Token::Template(_)
            | Token::TemplateHead(_) => true,
            Token::Keyword(k) => matches!(
                k,
                Keyword::This
                    | Keyword::Super
                    | Keyword::True
                    | Keyword::False
                    | Keyword::Null
                    | Keyword::Function
                    | Keyword::Class
                    | Keyword::New
                    | Keyword::Delete
                    | Keyword::Typeof
                    | Keyword::Void
                    | Keyword::Import
            ),
            Token::Punctuator(p) => matches!(
                p,
                Punctuator::LParen
                    | Punctuator::LBracket
                    | Punctuator::LBrace
                    | Punctuator::Not
                    | Punctuator::Tilde
                    | Punctuator::Plus
                    | Punctuator::Minus
                    | Punctuator::PlusPlus
                    | Punctuator::MinusMinus
            ),
            _ => false,
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn parse_statement(&mut self) -> Result<Node, SyntaxError> {
        match &self.cur {
            Token::Punctuator(Punctuator::LBrace) => self.parse_block(false),
            Token::Punctuator(Punctuator::Semicolon) => {
                self.advance()?;
                Ok(Node::new(GrammarKind::Stmt))
            }
            Token::Keyword(Keyword::Var) | Token::Keyword(Keyword::Let) | Token::Keyword(Keyword::Const) => {
                self.parse_var_decl(false)
            }
            Token::Keyword(Keyword::Function) => {
                let mut stmt = Node::new(GrammarKind::Stmt);
                self.parse_function_into(&mut stmt, false, false)?;
                Ok(stmt)
            }
            Token::Keyword(Keyword::Class) => {
                let mut stmt = Node::new(GrammarKind::Stmt);
                self.parse_class_into(&mut stmt, false)?;
                Ok(stmt)
            }
            Token::Keyword(Keyword::If) => self.parse_if_stmt(),
            Token::Keyword(Keyword::While) => self.parse_while_stmt(),
            Token::Keyword(Keyword::Do) => self.parse_do_stmt(),
            Token::Keyword(Keyword::For) => self.parse_for_stmt(),
            Token::Keyword(Keyword::Switch) => self.parse_switch_stmt(),
            Token::Keyword(Keyword::Return) => self.parse_return_stmt(),
            Token::Keyword(Keyword::Break) | Token::Keyword(Keyword::Continue) => {
                self.parse_break_continue_stmt()
            }
            Token::Keyword(Keyword::Throw) => self.parse_throw_stmt(),
            Token::Keyword(Keyword::Try) => self.parse_try_stmt(),
            Token::Keyword(Keyword::With) => self.parse_with_stmt(),
            Token::Keyword(Keyword::Debugger) => {
                let mut stmt = Node::new(GrammarKind::Stmt);
                stmt.push_token("debugger");
                self.advance()?;
                self.eat_semicolon()?;
                Ok(stmt)
            }
            Token::Keyword(Keyword::Import) => self.parse_import_stmt(),
            Token::Keyword(Keyword::Export) => self.parse_export_stmt(),
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    self.advance()?;
                    let mut stmt = Node::new(GrammarKind::Stmt);
                    stmt.push_token(name);
                    let body = self.parse_statement()?;
                    stmt.push_node(body);
                    Ok(stmt)
                } else if name == "async" {
                    // statement-level async commits to an async function
                    if !self.is_keyword(Keyword::Function) {
                        return Err(expected_token(
                            &["function"],
                            &self.cur,
                            "async function statement",
                            self.pos(),
                        ));
                    }
                    let mut stmt = Node::new(GrammarKind::Stmt);
                    stmt.push_token("async");
                    self.parse_function_into(&mut stmt, false, true)?;
                    Ok(stmt)
                } else {
                    self.parse_expression_stmt_seeded(name)
                }
            }
            _ => self.parse_expression_stmt(),
        }
    }

    /// A `{ … }` block. `ends_expr` is true when the block closes an
    /// expression (function/class expression bodies), which puts the
    /// lexer into division mode after the `}`.
    fn parse_block(&mut self, ends_expr: bool) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("{");
        self.advance()?;
        while !self.is_punct(Punctuator::RBrace) {
            if self.cur.is_eof() {
                return Err(expected_token(&["}"], &self.cur, "block statement", self.pos()));
            }
            let inner = self.parse_statement()?;
            stmt.push_node(inner);
        }
        stmt.push_token("}");
        self.advance_mode(!ends_expr)?;
        Ok(stmt)
    }

    /// A block that must start with `{`, reported in `context`.
    fn parse_braced_block(&mut self, context: &str, ends_expr: bool) -> Result<Node, SyntaxError> {
        if !self.is_punct(Punctuator::LBrace) {
            return Err(expected_token(&["{"], &self.cur, context, self.pos()));
        }
        self.parse_block(ends_expr)
    }

    fn parse_expression_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut expr = Node::new(GrammarKind::Expr);
        self.parse_expr(&mut expr, PREC_COMMA)?;
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_node(expr);
        self.eat_semicolon()?;
        Ok(stmt)
    }

    /// An expression statement whose leading identifier has already been
    /// consumed by the label lookahead.
    fn parse_expression_stmt_seeded(&mut self, name: String) -> Result<Node, SyntaxError> {
        let mut expr = Node::new(GrammarKind::Expr);
        self.parse_ident_operand(&mut expr, name, PREC_COMMA)?;
        self.parse_postfix(&mut expr)?;
        self.parse_expr_suffix(&mut expr, PREC_COMMA)?;
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_node(expr);
        self.eat_semicolon()?;
        Ok(stmt)
    }

    /// `( Expr )` head of a control structure. The closing `)` re-enters
    /// regex mode: `if(0)/1/g` begins a regex, unlike a call's `)`.
    fn parse_paren_expr_head(&mut self, node: &mut Node, context: &str) -> Result<(), SyntaxError> {
        if !self.is_punct(Punctuator::LParen) {
            return Err(expected_token(&["("], &self.cur, context, self.pos()));
        }
        self.advance()?;
        let expr = self.parse_expr_node(PREC_COMMA)?;
        node.push_node(expr);
        if !self.is_punct(Punctuator::RParen) {
            return Err(expected_token(&[")"], &self.cur, context, self.pos()));
        }
        self.advance_mode(true)
    }

    fn parse_if_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("if");
        self.advance()?;
        self.parse_paren_expr_head(&mut stmt, "if statement")?;
        let body = self.parse_statement()?;
        stmt.push_node(body);
        if self.is_keyword(Keyword::Else) {
            stmt.push_token("else");
            self.advance()?;
            let alternate = self.parse_statement()?;
            stmt.push_node(alternate);
        }
        Ok(stmt)
    }

    fn parse_while_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("while");
        self.advance()?;
        self.parse_paren_expr_head(&mut stmt, "while statement")?;
        let body = self.parse_statement()?;
        stmt.push_node(body);
        Ok(stmt)
    }

    fn parse_do_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("do");
        self.advance()?;
        let body = self.parse_statement()?;
        stmt.push_node(body);
        if !self.is_keyword(Keyword::While) {
            return Err(expected_token(&["while"], &self.cur, "do statement", self.pos()));
        }
        stmt.push_token("while");
        self.advance()?;
        self.parse_paren_expr_head(&mut stmt, "do statement")?;
        self.eat_semicolon()?;
        Ok(stmt)
    }

    fn parse_with_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("with");
        self.advance()?;
        self.parse_paren_expr_head(&mut stmt, "with statement")?;
        let body = self.parse_statement()?;
        stmt.push_node(body);
        Ok(stmt)
    }

    fn parse_for_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("for");
        self.advance()?;
        if self.is_ident("await") {
            stmt.push_token("await");
            self.advance()?;
        }
        if !self.is_punct(Punctuator::LParen) {
            return Err(expected_token(&["("], &self.cur, "for statement", self.pos()));
        }
        self.advance()?;

        // `in` is not an operator inside the head init
        self.no_in = true;
        let init = if self.is_punct(Punctuator::Semicolon) {
            None
        } else if self.is_keyword(Keyword::Var)
            || self.is_keyword(Keyword::Let)
            || self.is_keyword(Keyword::Const)
        {
            Some(self.parse_var_decl(true)?)
        } else {
            Some(self.parse_expr_node(PREC_COMMA)?)
        };
        self.no_in = false;

        if self.is_keyword(Keyword::In) {
            if let Some(init) = init {
                stmt.push_node(init);
            }
            stmt.push_token("in");
            self.advance()?;
            let object = self.parse_expr_node(PREC_COMMA)?;
            stmt.push_node(object);
        } else if self.is_ident("of") {
            if let Some(init) = init {
                stmt.push_node(init);
            }
            stmt.push_token("of");
            self.advance()?;
            let iterable = self.parse_expr_node(PREC_ASSIGN)?;
            stmt.push_node(iterable);
        } else if self.is_punct(Punctuator::Semicolon) {
            if let Some(init) = init {
                stmt.push_node(init);
            }
            stmt.push_token(";");
            self.advance()?;
            if !self.is_punct(Punctuator::Semicolon) && !self.is_punct(Punctuator::RParen) {
                let test = self.parse_expr_node(PREC_COMMA)?;
                stmt.push_node(test);
            }
            if self.is_punct(Punctuator::Semicolon) {
                stmt.push_token(";");
                self.advance()?;
                if !self.is_punct(Punctuator::RParen) {
                    let update = self.parse_expr_node(PREC_COMMA)?;
                    stmt.push_node(update);
                }
            }
        } else {
            return Err(expected_token(
                &["in", "of", ";"],
                &self.cur,
                "for statement",
                self.pos(),
            ));
        }

        if !self.is_punct(Punctuator::RParen) {
            return Err(expected_token(&[")"], &self.cur, "for statement", self.pos()));
        }
        self.advance_mode(true)?;
        let body = self.parse_statement()?;
        stmt.push_node(body);
        Ok(stmt)
    }

    fn parse_switch_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("switch");
        self.advance()?;
        self.parse_paren_expr_head(&mut stmt, "switch statement")?;
        if !self.is_punct(Punctuator::LBrace) {
            return Err(expected_token(&["{"], &self.cur, "switch statement", self.pos()));
        }
        self.advance()?;
        while !self.is_punct(Punctuator::RBrace) {
            let mut clause = Node::new(GrammarKind::Clause);
            if self.is_keyword(Keyword::Case) {
                clause.push_token("case");
                self.advance()?;
                let test = self.parse_expr_node(PREC_COMMA)?;
                clause.push_node(test);
            } else if self.is_keyword(Keyword::Default) {
                clause.push_token("default");
                self.advance()?;
            } else {
                return Err(expected_token(
                    &["case", "default"],
                    &self.cur,
                    "switch statement",
                    self.pos(),
                ));
            }
            if !self.is_punct(Punctuator::Colon) {
                return Err(expected_token(&[":"], &self.cur, "switch statement", self.pos()));
            }
            self.advance()?;
            while !self.is_keyword(Keyword::Case)
                && !self.is_keyword(Keyword::Default)
                && !self.is_punct(Punctuator::RBrace)
                && !self.cur.is_eof()
            {
                let inner = self.parse_statement()?;
                clause.push_node(inner);
            }
            stmt.push_node(clause);
        }
        self.advance()?;
        Ok(stmt)
    }

    fn parse_return_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("return");
        self.advance()?;
        // restricted production: a line terminator ends the statement
        if !self.prev_lt && self.can_start_expression() {
            let value = self.parse_expr_node(PREC_COMMA)?;
            stmt.push_node(value);
        }
        self.eat_semicolon()?;
        Ok(stmt)
    }

    fn parse_break_continue_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token(self.cur.text());
        self.advance()?;
        if !self.prev_lt {
            if let Token::Identifier(label) = &self.cur {
                stmt.push_token(label.clone());
                self.advance()?;
            }
        }
        self.eat_semicolon()?;
        Ok(stmt)
    }

    fn parse_throw_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("throw");
        self.advance()?;
        // restricted production: the argument may not cross a line terminator
        if self.prev_lt {
            return Err(unexpected_token(&self.cur, "throw statement", self.pos()));
        }
        let value = self.parse_expr_node(PREC_COMMA)?;
        stmt.push_node(value);
        self.eat_semicolon()?;
        Ok(stmt)
    }

    fn parse_try_stmt(&mut self) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("try");
        self.advance()?;
        let block = self.parse_braced_block("try statement", false)?;
        stmt.push_node(block);
        let mut handled = false;
        if self.is_keyword(Keyword::Catch) {
            handled = true;
            stmt.push_token("catch");
            self.advance()?;
            if self.is_punct(Punctuator::LParen) {
                self.advance()?;
                let binding = self.parse_binding_target()?;
                stmt.push_node(binding);
                if !self.is_punct(Punctuator::RParen) {
                    return Err(expected_token(&[")"], &self.cur, "try statement", self.pos()));
                }
                self.advance()?;
            }
            let block = self.parse_braced_block("try statement", false)?;
            stmt.push_node(block);
        }
        if self.is_keyword(Keyword::Finally) {
            handled = true;
            stmt.push_token("finally");
            self.advance()?;
            let block = self.parse_braced_block("try statement", false)?;
            stmt.push_node(block);
        }
        if !handled {
            return Err(expected_token(
                &["catch", "finally"],
                &self.cur,
                "try statement",
                self.pos(),
            ));
        }
        Ok(stmt)
    }

    // =========================================================================
    // Declarations and binding patterns
    // =========================================================================

    /// `var`/`let`/`const` declaration. In a `for` head the trailing `;`
    /// is left for the caller and the binding list may be followed by
    /// `in` or `of`.
    fn parse_var_decl(&mut self, for_head: bool) -> Result<Node, SyntaxError> {
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token(self.cur.text());
        self.advance()?;
        loop {
            let element = self.parse_binding_element()?;
            stmt.push_node(element);
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                continue;
            }
            break;
        }
        if !for_head {
            self.eat_semicolon()?;
        }
        Ok(stmt)
    }

    /// A binding target with an optional `= <AssignmentExpression>`
    /// default, folded into the same `Binding` node.
    fn parse_binding_element(&mut self) -> Result<Node, SyntaxError> {
        let mut binding = self.parse_binding_target()?;
        if self.is_punct(Punctuator::Assign) {
            binding.push_token("=");
            self.advance()?;
            let default = self.parse_expr_node(PREC_ASSIGN)?;
            binding.push_node(default);
        }
        Ok(binding)
    }

    /// A bare identifier, array binding pattern, or object binding
    /// pattern.
    fn parse_binding_target(&mut self) -> Result<Node, SyntaxError> {
        match &self.cur {
            Token::Identifier(name) => {
                let mut binding = Node::new(GrammarKind::Binding);
                binding.push_token(name.clone());
                self.advance()?;
                Ok(binding)
            }
            Token::Punctuator(Punctuator::LBracket) => self.parse_array_binding(),
            Token::Punctuator(Punctuator::LBrace) => self.parse_object_binding(),
            _ => Err(unexpected_token(&self.cur, "binding", self.pos())),
        }
    }

    /// `[ … ]` binding pattern. Elisions are dropped from the tree.
    fn parse_array_binding(&mut self) -> Result<Node, SyntaxError> {
        let mut binding = Node::new(GrammarKind::Binding);
        binding.push_token("[");
        self.advance()?;
        loop {
            while self.is_punct(Punctuator::Comma) {
                self.advance()?;
            }
            if self.is_punct(Punctuator::RBracket) {
                break;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                binding.push_token("...");
                self.advance()?;
                let target = self.parse_binding_target()?;
                binding.push_node(target);
                if !self.is_punct(Punctuator::RBracket) {
                    return Err(expected_token(
                        &["]"],
                        &self.cur,
                        "array binding pattern",
                        self.pos(),
                    ));
                }
                break;
            }
            let element = self.parse_binding_element()?;
            binding.push_node(element);
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::RBracket) {
                break;
            }
            return Err(expected_token(
                &[",", "]"],
                &self.cur,
                "array binding pattern",
                self.pos(),
            ));
        }
        binding.push_token("]");
        self.advance()?;
        Ok(binding)
    }

    /// `{ … }` binding pattern. The rest element must be a bare
    /// identifier.
    fn parse_object_binding(&mut self) -> Result<Node, SyntaxError> {
        let mut binding = Node::new(GrammarKind::Binding);
        binding.push_token("{");
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                binding.push_token("...");
                self.advance()?;
                match &self.cur {
                    Token::Identifier(name) => {
                        let mut rest = Node::new(GrammarKind::Binding);
                        rest.push_token(name.clone());
                        self.advance()?;
                        binding.push_node(rest);
                    }
                    _ => {
                        return Err(expected_token(
                            &["Identifier"],
                            &self.cur,
                            "object binding pattern",
                            self.pos(),
                        ))
                    }
                }
            } else {
                self.parse_object_binding_property(&mut binding)?;
            }
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            return Err(expected_token(
                &[",", "}"],
                &self.cur,
                "object binding pattern",
                self.pos(),
            ));
        }
        binding.push_token("}");
        self.advance()?;
        Ok(binding)
    }

    fn parse_object_binding_property(&mut self, binding: &mut Node) -> Result<(), SyntaxError> {
        const CONTEXT: &str = "object binding pattern";
        match self.cur.clone() {
            Token::Identifier(name) => {
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    binding.push_token(name);
                    binding.push_token(":");
                    self.advance()?;
                    let value = self.parse_binding_element()?;
                    binding.push_node(value);
                } else if self.is_punct(Punctuator::Assign) {
                    let mut shorthand = Node::new(GrammarKind::Binding);
                    shorthand.push_token(name);
                    shorthand.push_token("=");
                    self.advance()?;
                    let default = self.parse_expr_node(PREC_ASSIGN)?;
                    shorthand.push_node(default);
                    binding.push_node(shorthand);
                } else {
                    let mut shorthand = Node::new(GrammarKind::Binding);
                    shorthand.push_token(name);
                    binding.push_node(shorthand);
                }
            }
            Token::Keyword(keyword) => {
                // reserved words may only be property names, never shorthand
                self.advance()?;
                if !self.is_punct(Punctuator::Colon) {
                    return Err(expected_token(&[":"], &self.cur, CONTEXT, self.pos()));
                }
                binding.push_token(keyword.as_str());
                binding.push_token(":");
                self.advance()?;
                let value = self.parse_binding_element()?;
                binding.push_node(value);
            }
            Token::String(text) | Token::Numeric(text) => {
                self.advance()?;
                if !self.is_punct(Punctuator::Colon) {
                    return Err(expected_token(&[":"], &self.cur, CONTEXT, self.pos()));
                }
                binding.push_token(text);
                binding.push_token(":");
                self.advance()?;
                let value = self.parse_binding_element()?;
                binding.push_node(value);
            }
            Token::Punctuator(Punctuator::LBracket) => {
                binding.push_token("[");
                self.advance()?;
                let key = self.parse_expr_node(PREC_ASSIGN)?;
                binding.push_node(key);
                if !self.is_punct(Punctuator::RBracket) {
                    return Err(expected_token(&["]"], &self.cur, CONTEXT, self.pos()));
                }
                binding.push_token("]");
                self.advance()?;
                if !self.is_punct(Punctuator::Colon) {
                    return Err(expected_token(&[":"], &self.cur, CONTEXT, self.pos()));
                }
                binding.push_token(":");
                self.advance()?;
                let value = self.parse_binding_element()?;
                binding.push_node(value);
            }
            _ => {
                return Err(expected_token(
                    &["Identifier", "String", "Numeric", "["],
                    &self.cur,
                    CONTEXT,
                    self.pos(),
                ))
            }
        }
        Ok(())
    }

    // =========================================================================
    // Functions, classes, methods
    // =========================================================================

    /// `function` head, parameters, and body, pushed flat into `node`
    /// (a `Stmt` for declarations, the surrounding `Expr` for function
    /// expressions). The caller pushes a leading `async` itself.
    fn parse_function_into(
        &mut self,
        node: &mut Node,
        is_expr: bool,
        is_async: bool,
    ) -> Result<(), SyntaxError> {
        node.push_token("function");
        self.advance()?;
        if self.is_punct(Punctuator::Star) {
            node.push_token("*");
            self.advance()?;
        }
        if let Token::Identifier(name) = &self.cur {
            node.push_token(name.clone());
            self.advance()?;
        }
        self.parse_params_into(node, "function declaration")?;
        if !self.is_punct(Punctuator::LBrace) {
            return Err(expected_token(
                &["{"],
                &self.cur,
                "function declaration",
                self.pos(),
            ));
        }
        let outer_async = self.in_async;
        self.in_async = is_async;
        let body = self.parse_block(is_expr);
        self.in_async = outer_async;
        node.push_node(body?);
        Ok(())
    }

    /// `( … )` parameter list: binding elements with an optional final
    /// rest element and a permitted trailing comma. The parentheses do
    /// not appear in the tree.
    fn parse_params_into(&mut self, node: &mut Node, context: &str) -> Result<(), SyntaxError> {
        if !self.is_punct(Punctuator::LParen) {
            return Err(expected_token(&["("], &self.cur, context, self.pos()));
        }
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RParen) {
                break;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                node.push_token("...");
                self.advance()?;
                let target = self.parse_binding_target()?;
                node.push_node(target);
                if !self.is_punct(Punctuator::RParen) {
                    return Err(expected_token(&[")"], &self.cur, context, self.pos()));
                }
                break;
            }
            let element = self.parse_binding_element()?;
            node.push_node(element);
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::RParen) {
                break;
            }
            return Err(expected_token(&[",", ")"], &self.cur, context, self.pos()));
        }
        self.advance()?;
        Ok(())
    }

    /// `class` head, optional `extends` left-hand-side expression, and
    /// body of `Method` nodes. The braces do not appear in the tree.
    fn parse_class_into(&mut self, node: &mut Node, is_expr: bool) -> Result<(), SyntaxError> {
        node.push_token("class");
        self.advance()?;
        if let Token::Identifier(name) = &self.cur {
            node.push_token(name.clone());
            self.advance()?;
        }
        if self.is_keyword(Keyword::Extends) {
            node.push_token("extends");
            self.advance()?;
            let mut heritage = Node::new(GrammarKind::Expr);
            self.parse_operand(&mut heritage, PREC_LHS)?;
            node.push_node(heritage);
        }
        if !self.is_punct(Punctuator::LBrace) {
            return Err(expected_token(&["{"], &self.cur, "class statement", self.pos()));
        }
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::Semicolon) {
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            if self.cur.is_eof() {
                return Err(expected_token(&["}"], &self.cur, "class statement", self.pos()));
            }
            let method = self.parse_class_method()?;
            node.push_node(method);
        }
        self.advance_mode(!is_expr)?;
        Ok(())
    }

    /// A class method: modifier sequence (`static`, `async`, `*`,
    /// `get`/`set`), property name, parameters, body. Each contextual
    /// modifier backs off to a plain method name when `(` follows it.
    fn parse_class_method(&mut self) -> Result<Node, SyntaxError> {
        let mut method = Node::new(GrammarKind::Method);
        let mut accessor = Accessor::None;

        if self.is_ident("static") {
            self.advance()?;
            if self.is_punct(Punctuator::LParen) {
                method.push_token("static");
                self.parse_method_params_body(&mut method, Accessor::None)?;
                return Ok(method);
            }
            method.push_token("static");
        }
        if self.is_ident("async") {
            self.advance()?;
            if self.is_punct(Punctuator::LParen) {
                method.push_token("async");
                self.parse_method_params_body(&mut method, Accessor::None)?;
                return Ok(method);
            }
            method.push_token("async");
            if self.is_punct(Punctuator::Star) {
                method.push_token("*");
                self.advance()?;
            }
        } else if self.is_punct(Punctuator::Star) {
            method.push_token("*");
            self.advance()?;
        } else if self.is_ident("get") || self.is_ident("set") {
            let which = self.cur.text().to_string();
            self.advance()?;
            if self.is_punct(Punctuator::LParen) {
                method.push_token(which);
                self.parse_method_params_body(&mut method, Accessor::None)?;
                return Ok(method);
            }
            accessor = if which == "get" { Accessor::Get } else { Accessor::Set };
            method.push_token(which);
        }

        self.parse_method_name(&mut method)?;
        self.parse_method_params_body(&mut method, accessor)?;
        Ok(method)
    }

    /// Method property name: identifier, reserved word, string, numeric,
    /// or computed `[ expr ]`.
    fn parse_method_name(&mut self, method: &mut Node) -> Result<(), SyntaxError> {
        const CONTEXT: &str = "method definition";
        match self.cur.clone() {
            Token::Identifier(name) => {
                method.push_token(name);
                self.advance()?;
            }
            Token::Keyword(keyword) => {
                method.push_token(keyword.as_str());
                self.advance()?;
            }
            Token::String(text) | Token::Numeric(text) => {
                method.push_token(text);
                self.advance()?;
            }
            Token::Punctuator(Punctuator::LBracket) => {
                method.push_token("[");
                self.advance()?;
                let key = self.parse_expr_node(PREC_ASSIGN)?;
                method.push_node(key);
                if !self.is_punct(Punctuator::RBracket) {
                    return Err(expected_token(&["]"], &self.cur, CONTEXT, self.pos()));
                }
                method.push_token("]");
                self.advance()?;
            }
            _ => {
                return Err(expected_token(
                    &["Identifier", "String", "Numeric", "["],
                    &self.cur,
                    CONTEXT,
                    self.pos(),
                ))
            }
        }
        Ok(())
    }

    /// Parameter list and body of a method. `get` takes no parameters;
    /// `set` takes exactly one.
    fn parse_method_params_body(
        &mut self,
        method: &mut Node,
        accessor: Accessor,
    ) -> Result<(), SyntaxError> {
        const CONTEXT: &str = "method definition";
        match accessor {
            Accessor::Get => {
                if !self.is_punct(Punctuator::LParen) {
                    return Err(expected_token(&["("], &self.cur, CONTEXT, self.pos()));
                }
                self.advance()?;
                if !self.is_punct(Punctuator::RParen) {
                    return Err(expected_token(&[")"], &self.cur, CONTEXT, self.pos()));
                }
                self.advance()?;
            }
            Accessor::Set => {
                if !self.is_punct(Punctuator::LParen) {
                    return Err(expected_token(&["("], &self.cur, CONTEXT, self.pos()));
                }
                self.advance()?;
                let element = self.parse_binding_element()?;
                method.push_node(element);
                if !self.is_punct(Punctuator::RParen) {
                    return Err(expected_token(&[")"], &self.cur, CONTEXT, self.pos()));
                }
                self.advance()?;
            }
            Accessor::None => {
                self.parse_params_into(method, CONTEXT)?;
            }
        }
        if !self.is_punct(Punctuator::LBrace) {
            return Err(expected_token(&["{"], &self.cur, CONTEXT, self.pos()));
        }
        let body = self.parse_block(false)?;
        method.push_node(body);
        Ok(())
    }

    // =========================================================================
    // Modules
    // =========================================================================

    fn parse_import_stmt(&mut self) -> Result<Node, SyntaxError> {
        self.advance()?;

        // dynamic import in statement position is an expression statement
        if self.is_punct(Punctuator::LParen) {
            let mut expr = Node::new(GrammarKind::Expr);
            self.parse_dynamic_import(&mut expr)?;
            self.parse_postfix(&mut expr)?;
            self.parse_expr_suffix(&mut expr, PREC_COMMA)?;
            let mut stmt = Node::new(GrammarKind::Stmt);
            stmt.push_node(expr);
            self.eat_semicolon()?;
            return Ok(stmt);
        }

        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("import");
        match self.cur.clone() {
            Token::String(text) => {
                stmt.push_token(text);
                self.advance()?;
            }
            Token::Identifier(name) => {
                stmt.push_token(name);
                self.advance()?;
                if self.is_punct(Punctuator::Comma) {
                    stmt.push_token(",");
                    self.advance()?;
                    if self.is_punct(Punctuator::Star) {
                        self.parse_namespace_specifier(&mut stmt, "import statement")?;
                    } else if self.is_punct(Punctuator::LBrace) {
                        self.parse_named_specifiers(&mut stmt, "import statement")?;
                    } else {
                        return Err(expected_token(
                            &["*", "{"],
                            &self.cur,
                            "import statement",
                            self.pos(),
                        ));
                    }
                }
                self.parse_import_from(&mut stmt)?;
            }
            Token::Punctuator(Punctuator::Star) => {
                self.parse_namespace_specifier(&mut stmt, "import statement")?;
                self.parse_import_from(&mut stmt)?;
            }
            Token::Punctuator(Punctuator::LBrace) => {
                self.parse_named_specifiers(&mut stmt, "import statement")?;
                self.parse_import_from(&mut stmt)?;
            }
            _ => {
                return Err(expected_token(
                    &["String", "Identifier", "*", "{"],
                    &self.cur,
                    "import statement",
                    self.pos(),
                ))
            }
        }
        self.eat_semicolon()?;
        Ok(stmt)
    }

    /// `* as name`
    fn parse_namespace_specifier(&mut self, node: &mut Node, context: &str) -> Result<(), SyntaxError> {
        node.push_token("*");
        self.advance()?;
        if !self.is_ident("as") {
            return Err(expected_token(&["as"], &self.cur, context, self.pos()));
        }
        node.push_token("as");
        self.advance()?;
        match self.word() {
            Some(alias) => {
                node.push_token(alias);
                self.advance()?;
            }
            None => {
                return Err(expected_token(&["Identifier"], &self.cur, context, self.pos()));
            }
        }
        Ok(())
    }

    /// `{ name , name as alias , … }` with a permitted trailing comma.
    /// Specifier names may be any identifier or reserved word.
    fn parse_named_specifiers(&mut self, node: &mut Node, context: &str) -> Result<(), SyntaxError> {
        node.push_token("{");
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            let Some(name) = self.word() else {
                return Err(expected_token(&["}"], &self.cur, context, self.pos()));
            };
            node.push_token(name);
            self.advance()?;
            if self.is_ident("as") {
                node.push_token("as");
                self.advance()?;
                match self.word() {
                    Some(alias) => {
                        node.push_token(alias);
                        self.advance()?;
                    }
                    None => {
                        return Err(expected_token(
                            &["Identifier"],
                            &self.cur,
                            context,
                            self.pos(),
                        ));
                    }
                }
            }
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                if self.is_punct(Punctuator::RBrace) {
                    break;
                }
                node.push_token(",");
                continue;
            }
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            return Err(expected_token(&["}"], &self.cur, context, self.pos()));
        }
        node.push_token("}");
        self.advance()?;
        Ok(())
    }

    /// `from <String>`
    fn parse_import_from(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        if !self.is_ident("from") {
            return Err(expected_token(&["from"], &self.cur, "import statement", self.pos()));
        }
        node.push_token("from");
        self.advance()?;
        match self.cur.clone() {
            Token::String(text) => {
                node.push_token(text);
                self.advance()?;
            }
            _ => {
                return Err(expected_token(
                    &["String"],
                    &self.cur,
                    "import statement",
                    self.pos(),
                ))
            }
        }
        Ok(())
    }

    fn parse_export_stmt(&mut self) -> Result<Node, SyntaxError> {
        const CONTEXT: &str = "export statement";
        let mut stmt = Node::new(GrammarKind::Stmt);
        stmt.push_token("export");
        self.advance()?;
        match self.cur.clone() {
            Token::Punctuator(Punctuator::Star) => {
                stmt.push_token("*");
                self.advance()?;
                if self.is_ident("as") {
                    stmt.push_token("as");
                    self.advance()?;
                    match self.word() {
                        Some(alias) => {
                            stmt.push_token(alias);
                            self.advance()?;
                        }
                        None => {
                            return Err(expected_token(
                                &["Identifier"],
                                &self.cur,
                                CONTEXT,
                                self.pos(),
                            ));
                        }
                    }
                }
                self.parse_export_from(&mut stmt)?;
                self.eat_semicolon()?;
            }
            Token::Punctuator(Punctuator::LBrace) => {
                self.parse_named_specifiers(&mut stmt, CONTEXT)?;
                if self.is_ident("from") {
                    self.parse_export_from(&mut stmt)?;
                }
                self.eat_semicolon()?;
            }
            Token::Keyword(Keyword::Var) | Token::Keyword(Keyword::Let) | Token::Keyword(Keyword::Const) => {
                let declaration = self.parse_var_decl(false)?;
                stmt.push_node(declaration);
            }
            Token::Keyword(Keyword::Function) => {
                let mut declaration = Node::new(GrammarKind::Stmt);
                self.parse_function_into(&mut declaration, false, false)?;
                stmt.push_node(declaration);
            }
            Token::Keyword(Keyword::Class) => {
                let mut declaration = Node::new(GrammarKind::Stmt);
                self.parse_class_into(&mut declaration, false)?;
                stmt.push_node(declaration);
            }
            Token::Identifier(name) if name == "async" => {
                self.advance()?;
                if !self.is_keyword(Keyword::Function) {
                    return Err(expected_token(&["function"], &self.cur, CONTEXT, self.pos()));
                }
                let mut declaration = Node::new(GrammarKind::Stmt);
                declaration.push_token("async");
                self.parse_function_into(&mut declaration, false, true)?;
                stmt.push_node(declaration);
            }
            Token::Keyword(Keyword::Default) => {
                stmt.push_token("default");
                self.advance()?;
                match self.cur.clone() {
                    Token::Keyword(Keyword::Function) => {
                        let mut declaration = Node::new(GrammarKind::Stmt);
                        self.parse_function_into(&mut declaration, false, false)?;
                        stmt.push_node(declaration);
                    }
                    Token::Keyword(Keyword::Class) => {
                        let mut declaration = Node::new(GrammarKind::Stmt);
                        self.parse_class_into(&mut declaration, false)?;
                        stmt.push_node(declaration);
                    }
                    Token::Identifier(name) if name == "async" => {
                        self.advance()?;
                        if !self.is_keyword(Keyword::Function) {
                            return Err(expected_token(
                                &["function"],
                                &self.cur,
                                CONTEXT,
                                self.pos(),
                            ));
                        }
                        let mut declaration = Node::new(GrammarKind::Stmt);
                        declaration.push_token("async");
                        self.parse_function_into(&mut declaration, false, true)?;
                        stmt.push_node(declaration);
                    }
                    _ => {
                        let value = self.parse_expr_node(PREC_ASSIGN)?;
                        stmt.push_node(value);
                        self.eat_semicolon()?;
                    }
                }
            }
            _ => {
                return Err(expected_token(
                    &["*", "{", "var", "let", "const", "function", "async", "class", "default"],
                    &self.cur,
                    CONTEXT,
                    self.pos(),
                ))
            }
        }
        Ok(stmt)
    }

    fn parse_export_from(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        const CONTEXT: &str = "export statement";
        if !self.is_ident("from") {
            return Err(expected_token(&["from"], &self.cur, CONTEXT, self.pos()));
        }
        node.push_token("from");
        self.advance()?;
        match self.cur.clone() {
            Token::String(text) => {
                node.push_token(text);
                self.advance()?;
            }
            _ => return Err(expected_token(&["String"], &self.cur, CONTEXT, self.pos())),
        }
        Ok(())
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Parse an expression into a fresh `Expr` node.
    fn parse_expr_node(&mut self, min_prec: u8) -> Result<Node, SyntaxError> {
        let mut expr = Node::new(GrammarKind::Expr);
        self.parse_expr(&mut expr, min_prec)?;
        Ok(expr)
    }

    fn parse_expr(&mut self, node: &mut Node, min_prec: u8) -> Result<(), SyntaxError> {
        self.parse_operand(node, min_prec)?;
        self.parse_expr_suffix(node, min_prec)
    }

    /// Binary operator precedence, or `None` when the token is not a
    /// binary operator here (`in` is suppressed inside `for` heads).
    fn binary_precedence(&self, token: &Token) -> Option<u8> {
        match token {
            Token::Punctuator(p) => match p {
                Punctuator::StarStar => Some(13),
                Punctuator::Star | Punctuator::Slash | Punctuator::Percent => Some(12),
                Punctuator::Plus | Punctuator::Minus => Some(11),
                Punctuator::LtLt | Punctuator::GtGt | Punctuator::GtGtGt => Some(10),
                Punctuator::Lt | Punctuator::LtEq | Punctuator::Gt | Punctuator::GtEq => Some(9),
                Punctuator::EqEq
                | Punctuator::NotEq
                | Punctuator::EqEqEq
                | Punctuator::NotEqEq => Some(8),
                Punctuator::And => Some(7),
                Punctuator::Xor => Some(6),
                Punctuator::Or => Some(5),
                Punctuator::AndAnd => Some(4),
                Punctuator::OrOr | Punctuator::NullishCoalesce => Some(3),
                _ => None,
            },
            Token::Keyword(Keyword::In) if !self.no_in => Some(9),
            Token::Keyword(Keyword::Instanceof) => Some(9),
            _ => None,
        }
    }

    fn is_assign_op(&self) -> bool {
        matches!(
            &self.cur,
            Token::Punctuator(
                Punctuator::Assign
                    | Punctuator::PlusEq
                    | Punctuator::MinusEq
                    | Punctuator::StarEq
                    | Punctuator::SlashEq
                    | Punctuator::PercentEq
                    | Punctuator::StarStarEq
                    | Punctuator::AndEq
                    | Punctuator::OrEq
                    | Punctuator::XorEq
                    | Punctuator::LtLtEq
                    | Punctuator::GtGtEq
                    | Punctuator::GtGtGtEq
                    | Punctuator::AndAndEq
                    | Punctuator::OrOrEq
                    | Punctuator::NullishCoalesceEq
            )
        )
    }

    /// The operator/continuation loop after an operand. Binary chains
    /// stay flat in the current node; assignment right-hand sides and
    /// conditional branches become nested `Expr` nodes.
    fn parse_expr_suffix(&mut self, node: &mut Node, min_prec: u8) -> Result<(), SyntaxError> {
        loop {
            if self.is_punct(Punctuator::Arrow) && !self.prev_lt {
                // an arrow here means the operand was not a valid parameter list
                return Err(unexpected_token(&self.cur, "arrow function expression", self.pos()));
            }
            if min_prec <= PREC_ASSIGN {
                if self.binary_precedence(&self.cur).is_some() {
                    node.push_token(self.cur.text());
                    self.advance()?;
                    self.parse_operand(node, PREC_UNARY)?;
                    continue;
                }
                if self.is_punct(Punctuator::Question) {
                    node.push_token("?");
                    self.advance()?;
                    let consequent = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(consequent);
                    if !self.is_punct(Punctuator::Colon) {
                        return Err(expected_token(
                            &[":"],
                            &self.cur,
                            "conditional expression",
                            self.pos(),
                        ));
                    }
                    node.push_token(":");
                    self.advance()?;
                    let alternate = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(alternate);
                    continue;
                }
                if self.is_assign_op() {
                    node.push_token(self.cur.text());
                    self.advance()?;
                    let value = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(value);
                    continue;
                }
            }
            if min_prec <= PREC_COMMA && self.is_punct(Punctuator::Comma) {
                node.push_token(",");
                self.advance()?;
                self.parse_operand(node, PREC_UNARY)?;
                continue;
            }
            break;
        }
        Ok(())
    }

    /// Prefix operators, `new`, or a primary expression, followed by the
    /// postfix chain.
    fn parse_operand(&mut self, node: &mut Node, min_prec: u8) -> Result<(), SyntaxError> {
        match &self.cur {
            Token::Punctuator(
                Punctuator::Not
                | Punctuator::Tilde
                | Punctuator::Plus
                | Punctuator::Minus
                | Punctuator::PlusPlus
                | Punctuator::MinusMinus,
            ) if min_prec <= PREC_UNARY => {
                node.push_token(self.cur.text());
                self.advance()?;
                return self.parse_operand(node, PREC_UNARY);
            }
            Token::Keyword(Keyword::Delete | Keyword::Typeof | Keyword::Void)
                if min_prec <= PREC_UNARY =>
            {
                node.push_token(self.cur.text());
                self.advance()?;
                return self.parse_operand(node, PREC_UNARY);
            }
            Token::Keyword(Keyword::New) => {
                node.push_token("new");
                self.advance()?;
                if self.is_punct(Punctuator::Dot) {
                    node.push_token(".");
                    self.advance()?;
                    if !self.is_ident("target") {
                        return Err(expected_token(
                            &["target"],
                            &self.cur,
                            "left hand side expression",
                            self.pos(),
                        ));
                    }
                    node.push_token("target");
                    self.advance()?;
                } else {
                    return self.parse_operand(node, PREC_LHS);
                }
            }
            _ => self.parse_primary(node, min_prec)?,
        }
        self.parse_postfix(node)
    }

    fn parse_primary(&mut self, node: &mut Node, min_prec: u8) -> Result<(), SyntaxError> {
        match self.cur.clone() {
            Token::Identifier(name) => {
                self.advance()?;
                self.parse_ident_operand(node, name, min_prec)?;
            }
            Token::Numeric(text)
            | Token::String(text)
            | Token::Regex(text)
            | Token::Template(text) => {
                node.push_token(text);
                self.advance()?;
            }
            Token::TemplateHead(_) => {
                self.parse_template_into(node)?;
            }
            Token::Keyword(Keyword::This)
            | Token::Keyword(Keyword::True)
            | Token::Keyword(Keyword::False)
            | Token::Keyword(Keyword::Null) => {
                node.push_token(self.cur.text());
                self.advance()?;
            }
            Token::Keyword(Keyword::Super) => {
                node.push_token("super");
                self.advance()?;
                if self.cur.is_eof() {
                    return Err(expected_token(
                        &["(", "[", ".", "Template"],
                        &self.cur,
                        "left hand side expression",
                        self.pos(),
                    ));
                }
                if !self.is_punct(Punctuator::LParen)
                    && !self.is_punct(Punctuator::LBracket)
                    && !self.is_punct(Punctuator::Dot)
                {
                    return Err(unexpected_token(&self.cur, "left hand side expression", self.pos()));
                }
            }
            Token::Keyword(Keyword::Function) => {
                self.parse_function_into(node, true, false)?;
            }
            Token::Keyword(Keyword::Class) => {
                self.parse_class_into(node, true)?;
            }
            Token::Keyword(Keyword::Import) => {
                self.advance()?;
                self.parse_dynamic_import(node)?;
            }
            Token::Punctuator(Punctuator::LParen) => {
                self.parse_paren_group(node, false)?;
            }
            Token::Punctuator(Punctuator::LBracket) => {
                self.parse_array_literal(node)?;
            }
            Token::Punctuator(Punctuator::LBrace) => {
                self.parse_object_literal(node)?;
            }
            _ => return Err(unexpected_token(&self.cur, "expression", self.pos())),
        }
        Ok(())
    }

    /// `import ( expr )`; the parentheses do not appear in the tree.
    /// The `import` keyword itself has already been consumed.
    fn parse_dynamic_import(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token("import");
        if !self.is_punct(Punctuator::LParen) {
            return Err(expected_token(
                &["("],
                &self.cur,
                "left hand side expression",
                self.pos(),
            ));
        }
        self.advance()?;
        let argument = self.parse_expr_node(PREC_ASSIGN)?;
        node.push_node(argument);
        if !self.is_punct(Punctuator::RParen) {
            return Err(expected_token(
                &[")"],
                &self.cur,
                "left hand side expression",
                self.pos(),
            ));
        }
        self.advance()?;
        Ok(())
    }

    /// An operand beginning with an identifier that was already
    /// consumed. Resolves the contextual keywords: a same-line `=>`
    /// makes any identifier an arrow parameter; `yield` is a prefix
    /// expression in every operand position; `await` is one inside
    /// async bodies; `async` commits to an async function or arrow.
    fn parse_ident_operand(
        &mut self,
        node: &mut Node,
        name: String,
        min_prec: u8,
    ) -> Result<(), SyntaxError> {
        if self.is_punct(Punctuator::Arrow) && !self.prev_lt {
            let mut param = Node::new(GrammarKind::Binding);
            param.push_token(name);
            node.push_node(param);
            node.push_token("=>");
            self.advance()?;
            return self.parse_arrow_body(node, false);
        }

        if name == "yield" {
            node.push_token("yield");
            if !self.prev_lt && self.is_punct(Punctuator::Star) {
                node.push_token("*");
                self.advance()?;
                let operand = self.parse_expr_node(PREC_ASSIGN)?;
                node.push_node(operand);
            } else if !self.prev_lt && self.can_start_expression() {
                let operand = self.parse_expr_node(PREC_ASSIGN)?;
                node.push_node(operand);
            }
            return Ok(());
        }

        if name == "await" && self.in_async {
            if min_prec > PREC_UNARY {
                return Err(unexpected_token(
                    &Token::Identifier(name),
                    "expression",
                    self.pos(),
                ));
            }
            node.push_token("await");
            return self.parse_operand(node, PREC_UNARY);
        }

        if name == "async" {
            if self.prev_lt {
                return Err(unexpected_token(&self.cur, "async function expression", self.pos()));
            }
            if self.is_keyword(Keyword::Function) {
                node.push_token("async");
                return self.parse_function_into(node, true, true);
            }
            if min_prec > PREC_ASSIGN {
                // arrows are assignment-level; only an async function can
                // appear in a left-hand-side position
                return Err(expected_token(
                    &["function"],
                    &self.cur,
                    "async function expression",
                    self.pos(),
                ));
            }
            if let Token::Identifier(param) = self.cur.clone() {
                self.advance()?;
                if !self.is_punct(Punctuator::Arrow) || self.prev_lt {
                    return Err(expected_token(
                        &["=>"],
                        &self.cur,
                        "async arrow function expression",
                        self.pos(),
                    ));
                }
                node.push_token("async");
                let mut binding = Node::new(GrammarKind::Binding);
                binding.push_token(param);
                node.push_node(binding);
                node.push_token("=>");
                self.advance()?;
                return self.parse_arrow_body(node, true);
            }
            if self.is_punct(Punctuator::LParen) {
                node.push_token("async");
                return self.parse_paren_group(node, true);
            }
            return Err(expected_token(
                &["function", "Identifier"],
                &self.cur,
                "async function expression",
                self.pos(),
            ));
        }

        node.push_token(name);
        Ok(())
    }

    /// Arrow body: a block statement or a nested assignment expression.
    /// The body uses the arrow's own async context, not the outer one.
    fn parse_arrow_body(&mut self, node: &mut Node, is_async: bool) -> Result<(), SyntaxError> {
        let outer_async = self.in_async;
        self.in_async = is_async;
        let result = if self.is_punct(Punctuator::LBrace) {
            self.parse_block(true).map(|body| node.push_node(body))
        } else {
            self.parse_expr_node(PREC_ASSIGN).map(|body| node.push_node(body))
        };
        self.in_async = outer_async;
        result
    }

    /// Postfix chain: member access, optional chaining, calls, computed
    /// members, tagged templates, and update operators.
    fn parse_postfix(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        loop {
            match &self.cur {
                Token::Punctuator(Punctuator::Dot) => {
                    node.push_token(".");
                    self.advance()?;
                    match self.word() {
                        Some(name) => {
                            node.push_token(name);
                            self.advance()?;
                        }
                        None => {
                            return Err(expected_token(
                                &["Identifier"],
                                &self.cur,
                                "left hand side expression",
                                self.pos(),
                            ))
                        }
                    }
                }
                Token::Punctuator(Punctuator::OptionalChain) => {
                    node.push_token("?.");
                    self.advance()?;
                    match &self.cur {
                        Token::Identifier(_) | Token::Keyword(_) => {
                            node.push_token(self.cur.text());
                            self.advance()?;
                        }
                        Token::Punctuator(Punctuator::LParen) => {
                            self.parse_call_args(node)?;
                        }
                        Token::Punctuator(Punctuator::LBracket) => {
                            self.parse_computed_member(node)?;
                        }
                        Token::Template(_) => {
                            node.push_token(self.cur.text());
                            self.advance()?;
                        }
                        Token::TemplateHead(_) => {
                            self.parse_template_into(node)?;
                        }
                        _ => {
                            return Err(expected_token(
                                &["Identifier", "(", "[", "Template"],
                                &self.cur,
                                "left hand side expression",
                                self.pos(),
                            ))
                        }
                    }
                }
                Token::Punctuator(Punctuator::LParen) => {
                    self.parse_call_args(node)?;
                }
                Token::Punctuator(Punctuator::LBracket) => {
                    self.parse_computed_member(node)?;
                }
                Token::Punctuator(Punctuator::PlusPlus | Punctuator::MinusMinus)
                    if !self.prev_lt =>
                {
                    node.push_token(self.cur.text());
                    self.advance()?;
                }
                Token::Template(_) => {
                    node.push_token(self.cur.text());
                    self.advance()?;
                }
                Token::TemplateHead(_) => {
                    self.parse_template_into(node)?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// `( args )` of a call. Argument commas are not kept in the tree.
    fn parse_call_args(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token("(");
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RParen) {
                break;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                node.push_token("...");
                self.advance()?;
            }
            let argument = self.parse_expr_node(PREC_ASSIGN)?;
            node.push_node(argument);
            if self.is_punct(Punctuator::Comma) {
                self.advance()?;
                continue;
            }
            if !self.is_punct(Punctuator::RParen) {
                return Err(expected_token(
                    &[")"],
                    &self.cur,
                    "left hand side expression",
                    self.pos(),
                ));
            }
            break;
        }
        node.push_token(")");
        self.advance()?;
        Ok(())
    }

    /// `[ expr ]` member access.
    fn parse_computed_member(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token("[");
        self.advance()?;
        let index = self.parse_expr_node(PREC_COMMA)?;
        node.push_node(index);
        if !self.is_punct(Punctuator::RBracket) {
            return Err(expected_token(
                &["]"],
                &self.cur,
                "left hand side expression",
                self.pos(),
            ));
        }
        node.push_token("]");
        self.advance()?;
        Ok(())
    }

    /// Template literal with holes, reassembled from head/middle/tail
    /// parts with each hole a nested `Expr` node.
    fn parse_template_into(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token(self.cur.text());
        self.advance()?;
        loop {
            let hole = self.parse_expr_node(PREC_COMMA)?;
            node.push_node(hole);
            if !self.is_punct(Punctuator::RBrace) {
                return Err(expected_token(
                    &["Template"],
                    &self.cur,
                    "template literal",
                    self.pos(),
                ));
            }
            self.cur = self.lexer.template_continuation()?;
            self.prev_lt = false;
            let is_tail = matches!(self.cur, Token::TemplateTail(_));
            node.push_token(self.cur.text());
            self.advance()?;
            if is_tail {
                break;
            }
        }
        Ok(())
    }

    /// Parenthesized group, the cover grammar shared by grouping and
    /// arrow parameter lists. `... binding-target` is accepted eagerly
    /// whether or not `=>` follows; an empty group must be an arrow.
    fn parse_paren_group(&mut self, node: &mut Node, arrow_async: bool) -> Result<(), SyntaxError> {
        node.push_token("(");
        self.advance()?;
        let mut empty = true;
        if !self.is_punct(Punctuator::RParen) {
            empty = false;
            loop {
                if self.is_punct(Punctuator::Ellipsis) {
                    node.push_token("...");
                    self.advance()?;
                    let target = self.parse_binding_target()?;
                    node.push_node(target);
                } else {
                    let item = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(item);
                }
                if self.is_punct(Punctuator::Comma) {
                    self.advance()?;
                    if self.is_punct(Punctuator::RParen) {
                        break;
                    }
                    node.push_token(",");
                    continue;
                }
                if self.is_punct(Punctuator::RParen) {
                    break;
                }
                return Err(expected_token(&[",", ")"], &self.cur, "expression", self.pos()));
            }
        }
        node.push_token(")");
        self.advance()?;
        if self.is_punct(Punctuator::Arrow) && !self.prev_lt {
            node.push_token("=>");
            self.advance()?;
            return self.parse_arrow_body(node, arrow_async);
        }
        if empty {
            return Err(expected_token(
                &["=>"],
                &self.cur,
                "arrow function expression",
                self.pos(),
            ));
        }
        Ok(())
    }

    /// `[ … ]` array literal. Commas are kept verbatim in the tree.
    fn parse_array_literal(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token("[");
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RBracket) {
                break;
            }
            if self.is_punct(Punctuator::Comma) {
                node.push_token(",");
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                node.push_token("...");
                self.advance()?;
            }
            let element = self.parse_expr_node(PREC_ASSIGN)?;
            node.push_node(element);
        }
        node.push_token("]");
        self.advance()?;
        Ok(())
    }

    /// `{ … }` object literal: shorthand properties, `key : value`,
    /// `key = default` (cover grammar for destructuring), computed keys,
    /// method shorthand with modifiers, and `... expr` rest. Property
    /// commas are kept in the tree. The closing `}` ends an expression,
    /// so the lexer switches to division mode after it.
    fn parse_object_literal(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        node.push_token("{");
        self.advance()?;
        loop {
            if self.is_punct(Punctuator::RBrace) {
                break;
            }
            if self.is_punct(Punctuator::Comma) {
                node.push_token(",");
                self.advance()?;
                continue;
            }
            if self.is_punct(Punctuator::Ellipsis) {
                node.push_token("...");
                self.advance()?;
                let value = self.parse_expr_node(PREC_ASSIGN)?;
                node.push_node(value);
                continue;
            }
            self.parse_object_property(node)?;
        }
        node.push_token("}");
        self.advance_mode(false)?;
        Ok(())
    }

    fn parse_object_property(&mut self, node: &mut Node) -> Result<(), SyntaxError> {
        const CONTEXT: &str = "object literal";
        match self.cur.clone() {
            Token::Punctuator(Punctuator::Star) => {
                let mut method = Node::new(GrammarKind::Method);
                method.push_token("*");
                self.advance()?;
                self.parse_method_name(&mut method)?;
                self.parse_method_params_body(&mut method, Accessor::None)?;
                node.push_node(method);
            }
            Token::Identifier(name) => {
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    node.push_token(name);
                    node.push_token(":");
                    self.advance()?;
                    let value = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(value);
                } else if self.is_punct(Punctuator::Assign) {
                    node.push_token(name);
                    node.push_token("=");
                    self.advance()?;
                    let default = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(default);
                } else if self.is_punct(Punctuator::LParen) {
                    let mut method = Node::new(GrammarKind::Method);
                    method.push_token(name);
                    self.parse_method_params_body(&mut method, Accessor::None)?;
                    node.push_node(method);
                } else if self.is_punct(Punctuator::Comma) || self.is_punct(Punctuator::RBrace) {
                    node.push_token(name);
                } else if name == "async" || name == "get" || name == "set" {
                    // modifier followed by a method name
                    let mut method = Node::new(GrammarKind::Method);
                    method.push_token(name.clone());
                    let accessor = match name.as_str() {
                        "get" => Accessor::Get,
                        "set" => Accessor::Set,
                        _ => {
                            if self.is_punct(Punctuator::Star) {
                                method.push_token("*");
                                self.advance()?;
                            }
                            Accessor::None
                        }
                    };
                    self.parse_method_name(&mut method)?;
                    self.parse_method_params_body(&mut method, accessor)?;
                    node.push_node(method);
                } else {
                    return Err(expected_token(
                        &["=", ",", "}", "...", "Identifier", "String", "Numeric", "["],
                        &self.cur,
                        CONTEXT,
                        self.pos(),
                    ));
                }
            }
            Token::Keyword(keyword) => {
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    node.push_token(keyword.as_str());
                    node.push_token(":");
                    self.advance()?;
                    let value = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(value);
                } else if self.is_punct(Punctuator::LParen) {
                    let mut method = Node::new(GrammarKind::Method);
                    method.push_token(keyword.as_str());
                    self.parse_method_params_body(&mut method, Accessor::None)?;
                    node.push_node(method);
                } else {
                    return Err(expected_token(&[":", "("], &self.cur, CONTEXT, self.pos()));
                }
            }
            Token::String(text) | Token::Numeric(text) => {
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    node.push_token(text);
                    node.push_token(":");
                    self.advance()?;
                    let value = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(value);
                } else if self.is_punct(Punctuator::LParen) {
                    let mut method = Node::new(GrammarKind::Method);
                    method.push_token(text);
                    self.parse_method_params_body(&mut method, Accessor::None)?;
                    node.push_node(method);
                } else {
                    return Err(expected_token(&[":", "("], &self.cur, CONTEXT, self.pos()));
                }
            }
            Token::Punctuator(Punctuator::LBracket) => {
                self.advance()?;
                let key = self.parse_expr_node(PREC_ASSIGN)?;
                if !self.is_punct(Punctuator::RBracket) {
                    return Err(expected_token(&["]"], &self.cur, CONTEXT, self.pos()));
                }
                self.advance()?;
                if self.is_punct(Punctuator::Colon) {
                    node.push_token("[");
                    node.push_node(key);
                    node.push_token("]");
                    node.push_token(":");
                    self.advance()?;
                    let value = self.parse_expr_node(PREC_ASSIGN)?;
                    node.push_node(value);
                } else if self.is_punct(Punctuator::LParen) {
                    let mut method = Node::new(GrammarKind::Method);
                    method.push_token("[");
                    method.push_node(key);
                    method.push_token("]");
                    self.parse_method_params_body(&mut method, Accessor::None)?;
                    node.push_node(method);
                } else {
                    return Err(expected_token(&[":", "("], &self.cur, CONTEXT, self.pos()));
                }
            }
            _ => {
                return Err(expected_token(
                    &["=", ",", "}", "...", "Identifier", "String", "Numeric", "["],
                    &self.cur,
                    CONTEXT,
                    self.pos(),
                ))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        Parser::new(source).parse().unwrap().to_string()
    }

    fn fail(source: &str) -> String {
        Parser::new(source).parse().unwrap_err().to_string()
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(render(""), "");
        assert_eq!(render("/* comment */"), "");
    }

    #[test]
    fn test_declaration() {
        assert_eq!(render("var a = b;"), "Stmt(var Binding(a = Expr(b)))");
        assert_eq!(
            render("var a, b = c;"),
            "Stmt(var Binding(a) Binding(b = Expr(c)))"
        );
    }

    #[test]
    fn test_statement_seeding_keeps_labels_apart() {
        assert_eq!(render("label: var a"), "Stmt(label Stmt(var Binding(a)))");
        assert_eq!(render("a + b"), "Stmt(Expr(a + b))");
    }

    #[test]
    fn test_regex_division_split() {
        assert_eq!(render("if(0)/1/g"), "Stmt(if Expr(0) Stmt(Expr(/1/g)))");
        assert_eq!(render("i(0)/1/g"), "Stmt(Expr(i ( Expr(0) ) / 1 / g))");
    }

    #[test]
    fn test_restricted_production() {
        assert_eq!(render("return a"), "Stmt(return Expr(a))");
        assert_eq!(render("return\na"), "Stmt(return) Stmt(Expr(a))");
    }

    #[test]
    fn test_error_carries_context() {
        assert_eq!(fail("if"), "expected '(' instead of EOF in if statement");
        assert_eq!(fail("var 0"), "unexpected '0' in binding");
    }

    #[test]
    fn test_error_position() {
        let err = Parser::new("var 0").parse().unwrap_err();
        assert!(err.position.is_some());
    }
}
