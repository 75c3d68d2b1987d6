//! Parse driver: turns a source into printable output.

use crate::error::{CliError, CliResult};
use parser::lexer;
use parser::Parser;
use std::fs;

/// What the driver prints for a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The deterministic AST rendering (`Stmt(…) Stmt(…)`)
    Render,
    /// The AST serialized as JSON
    Json,
    /// The token stream, one token per line
    Tokens,
}

/// Drives the parser over files, inline sources, and REPL lines.
pub struct Driver {
    mode: OutputMode,
}

impl Driver {
    /// Create a driver with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// The driver's output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Read and parse a file, returning the printable output.
    pub fn parse_file(&self, path: &str) -> CliResult<String> {
        let source = fs::read_to_string(path)?;
        self.parse_source(&source)
    }

    /// Parse a source string, returning the printable output.
    pub fn parse_source(&self, source: &str) -> CliResult<String> {
        match self.mode {
            OutputMode::Render => {
                let ast = Parser::new(source).parse()?;
                Ok(ast.to_string())
            }
            OutputMode::Json => {
                let ast = Parser::new(source).parse()?;
                serde_json::to_string_pretty(&ast)
                    .map_err(|e| CliError::Repl(format!("serialization failed: {}", e)))
            }
            OutputMode::Tokens => {
                let tokens = lexer::tokenize(source)?;
                let mut out = String::new();
                for token in tokens {
                    out.push_str(token.text());
                    out.push('\n');
                }
                out.pop();
                Ok(out)
            }
        }
    }
}
