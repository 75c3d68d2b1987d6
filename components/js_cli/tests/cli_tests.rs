//! CLI argument parsing tests
//!
//! Tests for verifying clap argument parsing works correctly

use clap::Parser as ClapParser;
use js_cli::Cli;

/// Test parsing no arguments (default behavior)
#[test]
fn cli_parse_no_args() {
    let args: Vec<&str> = vec!["kelp-js"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.file, None);
    assert_eq!(cli.eval, None);
    assert!(!cli.repl);
    assert!(!cli.json);
    assert!(!cli.tokens);
}

/// Test parsing --file option
#[test]
fn cli_parse_file_long() {
    let args = vec!["kelp-js", "--file", "script.js"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.file, Some("script.js".to_string()));
}

/// Test parsing -f option (short form)
#[test]
fn cli_parse_file_short() {
    let args = vec!["kelp-js", "-f", "script.js"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.file, Some("script.js".to_string()));
}

/// Test parsing --eval option
#[test]
fn cli_parse_eval() {
    let args = vec!["kelp-js", "--eval", "let a = 1;"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert_eq!(cli.eval, Some("let a = 1;".to_string()));
}

/// Test parsing --repl option
#[test]
fn cli_parse_repl_long() {
    let args = vec!["kelp-js", "--repl"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert!(cli.repl);
}

/// Test parsing -r option (short form)
#[test]
fn cli_parse_repl_short() {
    let args = vec!["kelp-js", "-r"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert!(cli.repl);
}

/// Test parsing --json option
#[test]
fn cli_parse_json() {
    let args = vec!["kelp-js", "--eval", "a", "--json"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert!(cli.json);
    assert!(!cli.tokens);
}

/// Test parsing --tokens option
#[test]
fn cli_parse_tokens() {
    let args = vec!["kelp-js", "--eval", "a", "--tokens"];
    let cli = Cli::try_parse_from(args).unwrap();

    assert!(cli.tokens);
}

/// Test that unknown flags are rejected
#[test]
fn cli_rejects_unknown_flags() {
    let args = vec!["kelp-js", "--bogus"];
    assert!(Cli::try_parse_from(args).is_err());
}
