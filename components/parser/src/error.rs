//! Grammar error constructors.
//!
//! Every parser subroutine tags its local errors with a fixed context
//! string naming the production under repair (`if statement`,
//! `object binding pattern`, `left hand side expression`, …). The two
//! message shapes are `expected <what> instead of <got> in <context>`
//! and `unexpected <got> in <context>`, with `<got>` being the
//! offending token's text in quotes or a bare `EOF`.

use crate::lexer::Token;
use core_types::{SourcePosition, SyntaxError};

/// Render a token the way error messages quote it: raw text in single
/// quotes, or a bare `EOF` for the end sentinel.
fn quote(token: &Token) -> String {
    if token.is_eof() {
        "EOF".to_string()
    } else {
        format!("'{}'", token.text())
    }
}

/// Join an expected-token list as `'a'`, `'a' or 'b'`, or
/// `'a', 'b', or 'c'`.
fn join_expected(expected: &[&str]) -> String {
    match expected {
        [] => String::new(),
        [only] => format!("'{}'", only),
        [first, second] => format!("'{}' or '{}'", first, second),
        _ => {
            let mut out = String::new();
            for (i, what) in expected.iter().enumerate() {
                if i + 1 == expected.len() {
                    out.push_str(&format!("or '{}'", what));
                } else {
                    out.push_str(&format!("'{}', ", what));
                }
            }
            out
        }
    }
}

/// `expected <what> instead of <got> in <context>`.
pub fn expected_token(
    expected: &[&str],
    got: &Token,
    context: &str,
    position: Option<SourcePosition>,
) -> SyntaxError {
    SyntaxError::new(
        format!(
            "expected {} instead of {} in {}",
            join_expected(expected),
            quote(got),
            context
        ),
        position,
    )
}

/// `unexpected <got> in <context>` (or `unexpected EOF in <context>`).
pub fn unexpected_token(
    got: &Token,
    context: &str,
    position: Option<SourcePosition>,
) -> SyntaxError {
    SyntaxError::new(
        format!("unexpected {} in {}", quote(got), context),
        position,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Punctuator, Token};

    #[test]
    fn test_single_expected() {
        let err = expected_token(&["("], &Token::Eof, "if statement", None);
        assert_eq!(err.to_string(), "expected '(' instead of EOF in if statement");
    }

    #[test]
    fn test_two_expected() {
        let err = expected_token(
            &["case", "default"],
            &Token::Identifier("bad".to_string()),
            "switch statement",
            None,
        );
        assert_eq!(
            err.to_string(),
            "expected 'case' or 'default' instead of 'bad' in switch statement"
        );
    }

    #[test]
    fn test_many_expected() {
        let err = expected_token(
            &["Identifier", "(", "[", "Template"],
            &Token::Punctuator(Punctuator::OptionalChain),
            "left hand side expression",
            None,
        );
        assert_eq!(
            err.to_string(),
            "expected 'Identifier', '(', '[', or 'Template' instead of '?.' in left hand side expression"
        );
    }

    #[test]
    fn test_unexpected() {
        let err = unexpected_token(&Token::Numeric("0".to_string()), "binding", None);
        assert_eq!(err.to_string(), "unexpected '0' in binding");
        let err = unexpected_token(&Token::Eof, "expression", None);
        assert_eq!(err.to_string(), "unexpected EOF in expression");
    }
}
