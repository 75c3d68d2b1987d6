//! Error types for the CLI.

use core_types::SyntaxError;
use std::fmt;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// File I/O error
    Io(std::io::Error),

    /// Grammar or lexical error from the parser
    Syntax(SyntaxError),

    /// REPL error
    Repl(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "File error: {}", e),
            CliError::Syntax(e) => write!(f, "Syntax error: {}", e),
            CliError::Repl(s) => write!(f, "REPL error: {}", s),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Syntax(e) => Some(e),
            CliError::Repl(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<SyntaxError> for CliError {
    fn from(err: SyntaxError) -> Self {
        CliError::Syntax(err)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
