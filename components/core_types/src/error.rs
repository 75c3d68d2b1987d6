//! Syntax error type shared by the lexer and parser.
//!
//! Every lexical and grammatical failure is reported as a [`SyntaxError`]
//! carrying a single-line message and the position at which scanning stopped.
//! The first error aborts a parse; there is no resynchronization.

use crate::SourcePosition;
use std::fmt;

/// A fatal syntax error with a human-readable message.
///
/// The message is one line of the shape `expected <what> instead of <got>
/// in <context>`, `unexpected <got> in <context>`, or `unexpected EOF in
/// <context>`. The position is carried separately so that drivers can
/// prefix `line:column` when they want to.
///
/// # Examples
///
/// ```
/// use core_types::SyntaxError;
///
/// let error = SyntaxError::new("unexpected '0' in binding", None);
/// assert_eq!(error.to_string(), "unexpected '0' in binding");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source position where scanning stopped
    pub position: Option<SourcePosition>,
}

impl SyntaxError {
    /// Create a syntax error from a message and an optional position.
    pub fn new(message: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = SyntaxError::new(
            "expected ')' instead of EOF in if statement",
            Some(SourcePosition {
                line: 1,
                column: 5,
                offset: 4,
            }),
        );
        assert_eq!(
            err.to_string(),
            "expected ')' instead of EOF in if statement"
        );
    }

    #[test]
    fn test_position_is_carried() {
        let err = SyntaxError::new("unexpected EOF in expression", None);
        assert!(err.position.is_none());
    }
}
