//! Full pipeline integration tests
//!
//! Source text through the parser component, checked against the
//! rendering contract, and cross-checked with the driver output.

use js_cli::{Driver, OutputMode};
use parser::parse;

/// The driver prints exactly the parser's rendering.
#[test]
fn test_driver_matches_parser_rendering() {
    let sources = [
        "let [a, ...b] = [1, 2, 3];",
        "for await (var a of b) {}",
        "x = a?.[b]?.c",
        "class a extends async function(){}{}",
        "`tmpl${x}`",
        "import yield, {yield} from \"pkg\"",
    ];
    let driver = Driver::new(OutputMode::Render);
    for source in sources {
        let direct = parse(source).unwrap().to_string();
        let driven = driver.parse_source(source).unwrap();
        assert_eq!(direct, driven, "source: {:?}", source);
    }
}

/// Representative end-to-end scenarios from the rendering contract.
#[test]
fn test_representative_scenarios() {
    let cases = [
        (
            "let [a, ...b] = [1, 2, 3];",
            "Stmt(let Binding([ Binding(a) ... Binding(b) ] = Expr([ Expr(1) , Expr(2) , Expr(3) ])))",
        ),
        (
            "for await (var a of b) {}",
            "Stmt(for await Stmt(var Binding(a)) of Expr(b) Stmt({ }))",
        ),
        ("x = a?.[b]?.c", "Stmt(Expr(x = Expr(a ?. [ Expr(b) ] ?. c)))"),
        (
            "class a extends async function(){}{}",
            "Stmt(class a extends Expr(async function Stmt({ })))",
        ),
        ("`tmpl${x}`", "Stmt(Expr(`tmpl${ Expr(x) }`))"),
        (
            "import yield, {yield} from \"pkg\"",
            "Stmt(import yield , { yield } from \"pkg\")",
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(parse(source).unwrap().to_string(), expected, "source: {:?}", source);
    }
}

/// Independent parsers share no state; interleaved parses agree.
#[test]
fn test_parsers_are_independent() {
    let a = "x = function() {} /42/i";
    let b = "f(); function foo() {} /42/i";
    let first_a = parse(a).unwrap().to_string();
    let first_b = parse(b).unwrap().to_string();
    assert_eq!(parse(a).unwrap().to_string(), first_a);
    assert_eq!(parse(b).unwrap().to_string(), first_b);
}
