//! Rejection tests for the parser.
//!
//! Each case pairs a source text with the expected error-message prefix.
//! All grammar errors are fatal; the parser does not resynchronize.

use parser::parse;

fn assert_error(source: &str, prefix: &str) {
    let err = parse(source).expect_err(&format!("expected error for {:?}", source));
    let message = err.to_string();
    assert!(
        message.starts_with(prefix),
        "source: {:?}\n  expected prefix: {}\n  actual message:  {}",
        source,
        prefix,
        message
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_if_statement_errors() {
    assert_error("if", "expected '(' instead of EOF in if statement");
    assert_error("if(a", "expected ')' instead of EOF in if statement");
}

#[test]
fn test_with_statement_errors() {
    assert_error("with", "expected '(' instead of EOF in with statement");
    assert_error("with(a", "expected ')' instead of EOF in with statement");
}

#[test]
fn test_do_statement_errors() {
    assert_error("do a++", "expected 'while' instead of EOF in do statement");
    assert_error("do a++ while", "expected '(' instead of EOF in do statement");
    assert_error("do a++ while(a", "expected ')' instead of EOF in do statement");
}

#[test]
fn test_while_statement_errors() {
    assert_error("while", "expected '(' instead of EOF in while statement");
    assert_error("while(a", "expected ')' instead of EOF in while statement");
}

#[test]
fn test_for_statement_errors() {
    assert_error("for", "expected '(' instead of EOF in for statement");
    assert_error("for b", "expected '(' instead of 'b' in for statement");
    assert_error("for(a", "expected 'in', 'of', or ';' instead of EOF in for statement");
    assert_error("for (a b)", "expected 'in', 'of', or ';' instead of 'b' in for statement");
    assert_error("for(a;a", "expected ')' instead of EOF in for statement");
    assert_error("for(a;a;a", "expected ')' instead of EOF in for statement");
    assert_error("for (var a in b;) {}", "expected ')' instead of ';' in for statement");
}

#[test]
fn test_switch_statement_errors() {
    assert_error("switch", "expected '(' instead of EOF in switch statement");
    assert_error("switch(a", "expected ')' instead of EOF in switch statement");
    assert_error("switch(a)", "expected '{' instead of EOF in switch statement");
    assert_error(
        "switch(a){bad:5}",
        "expected 'case' or 'default' instead of 'bad' in switch statement",
    );
    assert_error("switch(a){case", "unexpected EOF in expression");
    assert_error("switch(a){case a", "expected ':' instead of EOF in switch statement");
}

#[test]
fn test_async_statement_errors() {
    assert_error("async", "expected 'function' instead of EOF in async function statement");
}

#[test]
fn test_try_statement_errors() {
    assert_error("try{}catch(a", "expected ')' instead of EOF in try statement");
}

#[test]
fn test_function_declaration_errors() {
    assert_error("function", "expected '(' instead of EOF in function declaration");
    assert_error("function(a", "expected ',' or ')' instead of EOF in function declaration");
    assert_error("function(...a", "expected ')' instead of EOF in function declaration");
    assert_error("function()", "expected '{' instead of EOF in function declaration");
}

#[test]
fn test_class_statement_errors() {
    assert_error("class A", "expected '{' instead of EOF in class statement");
    assert_error("class A{", "expected '}' instead of EOF in class statement");
    assert_error("class A extends a b {}", "expected '{' instead of 'b' in class statement");
    assert_error(
        "class A{+",
        "expected 'Identifier', 'String', 'Numeric', or '[' instead of '+' in method definition",
    );
    assert_error("class A{[a", "expected ']' instead of EOF in method definition");
}

// =============================================================================
// Bindings
// =============================================================================

#[test]
fn test_array_binding_errors() {
    assert_error("var [...a", "expected ']' instead of EOF in array binding pattern");
    assert_error("var [a", "expected ',' or ']' instead of EOF in array binding pattern");
}

#[test]
fn test_object_binding_errors() {
    assert_error("var {[a", "expected ']' instead of EOF in object binding pattern");
    assert_error(
        "var {+",
        "expected 'Identifier', 'String', 'Numeric', or '[' instead of '+' in object binding pattern",
    );
    assert_error("var {a", "expected ',' or '}' instead of EOF in object binding pattern");
    assert_error("let {if = 5}", "expected ':' instead of '=' in object binding pattern");
    assert_error("let {...[]}", "expected 'Identifier' instead of '[' in object binding pattern");
    assert_error("let {...{}}", "expected 'Identifier' instead of '{' in object binding pattern");
}

#[test]
fn test_binding_errors() {
    assert_error("var 0", "unexpected '0' in binding");
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_object_literal_errors() {
    assert_error("x={[a", "expected ']' instead of EOF in object literal");
    assert_error("x={[a]", "expected ':' or '(' instead of EOF in object literal");
    assert_error(
        "x={+",
        "expected '=', ',', '}', '...', 'Identifier', 'String', 'Numeric', or '[' instead of '+' in object literal",
    );
}

#[test]
fn test_class_extends_errors() {
    assert_error("class a extends ||", "unexpected '||' in expression");
    assert_error("class a extends =", "unexpected '=' in expression");
    assert_error("class a extends ?", "unexpected '?' in expression");
    assert_error("class a extends =>", "unexpected '=>' in expression");
    assert_error("class a extends async", "expected 'function' instead of EOF in async function expression");
}

#[test]
fn test_conditional_expression_errors() {
    assert_error("x=a?b", "expected ':' instead of EOF in conditional expression");
}

#[test]
fn test_async_expression_errors() {
    assert_error("x=async a", "expected '=>' instead of EOF in async arrow function expression");
    assert_error("x=async", "expected 'function' or 'Identifier' instead of EOF in async function expression");
    assert_error("x=async\n", "unexpected EOF in async function expression");
}

#[test]
fn test_optional_chain_errors() {
    assert_error("x=?.?.b", "unexpected '?.' in expression");
    assert_error(
        "x=a?.?.b",
        "expected 'Identifier', '(', '[', or 'Template' instead of '?.' in left hand side expression",
    );
    assert_error(
        "x=a?..b",
        "expected 'Identifier', '(', '[', or 'Template' instead of '.' in left hand side expression",
    );
}

#[test]
fn test_template_literal_errors() {
    assert_error("`tmp${", "unexpected EOF in expression");
    assert_error("`tmp${x", "expected 'Template' instead of EOF in template literal");
}

#[test]
fn test_arrow_function_errors() {
    assert_error("x=5=>", "unexpected '=>' in arrow function expression");
}

#[test]
fn test_left_hand_side_errors() {
    assert_error("x=new.bad", "expected 'target' instead of 'bad' in left hand side expression");
    assert_error(
        "x=super",
        "expected '(', '[', '.', or 'Template' instead of EOF in left hand side expression",
    );
    assert_error("x=super `tmpl`", "unexpected '`tmpl`' in left hand side expression");
    assert_error("x=super(a", "expected ')' instead of EOF in left hand side expression");
    assert_error("x=super[a", "expected ']' instead of EOF in left hand side expression");
    assert_error("x=super.", "expected 'Identifier' instead of EOF in left hand side expression");
    assert_error("x=import", "expected '(' instead of EOF in left hand side expression");
    assert_error("x=import(5", "expected ')' instead of EOF in left hand side expression");
}

// =============================================================================
// Modules
// =============================================================================

#[test]
fn test_import_statement_errors() {
    assert_error(
        "import",
        "expected 'String', 'Identifier', '*', or '{' instead of EOF in import statement",
    );
    assert_error("import *", "expected 'as' instead of EOF in import statement");
    assert_error("import * as", "expected 'Identifier' instead of EOF in import statement");
    assert_error("import {", "expected '}' instead of EOF in import statement");
    assert_error("import {yield", "expected '}' instead of EOF in import statement");
    assert_error("import {yield as", "expected 'Identifier' instead of EOF in import statement");
    assert_error("import {yield,", "expected '}' instead of EOF in import statement");
    assert_error("import yield", "expected 'from' instead of EOF in import statement");
    assert_error("import yield from", "expected 'String' instead of EOF in import statement");
}

#[test]
fn test_export_statement_errors() {
    assert_error(
        "export",
        "expected '*', '{', 'var', 'let', 'const', 'function', 'async', 'class', or 'default' instead of EOF in export statement",
    );
    assert_error("export *", "expected 'from' instead of EOF in export statement");
    assert_error("export * as", "expected 'Identifier' instead of EOF in export statement");
    assert_error("export * as if", "expected 'from' instead of EOF in export statement");
    assert_error("export {", "expected '}' instead of EOF in export statement");
    assert_error("export {yield", "expected '}' instead of EOF in export statement");
    assert_error("export {yield,", "expected '}' instead of EOF in export statement");
    assert_error("export {yield as", "expected 'Identifier' instead of EOF in export statement");
    assert_error("export {} from", "expected 'String' instead of EOF in export statement");
    assert_error("export async", "expected 'function' instead of EOF in export statement");
    assert_error("export default async", "expected 'function' instead of EOF in export statement");
}

// =============================================================================
// Specific cases
// =============================================================================

#[test]
fn test_object_literal_is_not_a_block() {
    // as a statement this parses as a block, then fails on `if`
    assert_error("{a, if: b, do(){}, ...d}", "unexpected 'if' in expression");
}

#[test]
fn test_await_edges() {
    assert_error(
        "async function (a) { class a extends await",
        "unexpected 'await' in expression",
    );
    assert_error("x = await\n=> a++", "unexpected '=>' in expression");
}

#[test]
fn test_regex_division_errors() {
    assert_error("x = x / foo /", "unexpected EOF in expression");
    assert_error("bar (true) /foo/", "unexpected EOF in expression");
}
