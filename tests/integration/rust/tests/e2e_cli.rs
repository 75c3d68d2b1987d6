//! End-to-End CLI Integration Tests
//!
//! Tests the complete parse pipeline through the js_cli Driver API.
//! This is the highest level integration test - source text to printed
//! output.

use js_cli::{CliError, Driver, OutputMode};

/// Test: rendering a declaration through the driver
#[test]
fn test_e2e_render_declaration() {
    let driver = Driver::new(OutputMode::Render);
    let output = driver.parse_source("let x = 42;").expect("parse failed");
    assert_eq!(output, "Stmt(let Binding(x = Expr(42)))");
}

/// Test: rendering the regex/division calibration case
#[test]
fn test_e2e_render_regex_split() {
    let driver = Driver::new(OutputMode::Render);
    assert_eq!(
        driver.parse_source("if(0)/1/g").unwrap(),
        "Stmt(if Expr(0) Stmt(Expr(/1/g)))"
    );
    assert_eq!(
        driver.parse_source("i(0)/1/g").unwrap(),
        "Stmt(Expr(i ( Expr(0) ) / 1 / g))"
    );
}

/// Test: a syntax error surfaces with its message intact
#[test]
fn test_e2e_syntax_error_message() {
    let driver = Driver::new(OutputMode::Render);
    let err = driver.parse_source("class A extends a b {}").unwrap_err();
    match err {
        CliError::Syntax(e) => {
            assert_eq!(e.to_string(), "expected '{' instead of 'b' in class statement");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

/// Test: JSON output round-trips through serde_json
#[test]
fn test_e2e_json_output() {
    let driver = Driver::new(OutputMode::Json);
    let output = driver.parse_source("a + b").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let statements = value.get("statements").unwrap().as_array().unwrap();
    assert_eq!(statements.len(), 1);
}

/// Test: token output lists raw token texts
#[test]
fn test_e2e_tokens_output() {
    let driver = Driver::new(OutputMode::Tokens);
    let output = driver.parse_source("a?.b ?? `t`").unwrap();
    assert_eq!(output, "a\n?.\nb\n??\n`t`");
}

/// Test: module code parses end to end
#[test]
fn test_e2e_modules() {
    let driver = Driver::new(OutputMode::Render);
    assert_eq!(
        driver.parse_source("import yield, {yield} from \"pkg\"").unwrap(),
        "Stmt(import yield , { yield } from \"pkg\")"
    );
}
