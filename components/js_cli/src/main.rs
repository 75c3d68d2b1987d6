//! Kelp JavaScript parser CLI
//!
//! Entry point for the parser. Parses CLI arguments and delegates to
//! the Driver for parsing and printing.

use clap::Parser as ClapParser;
use js_cli::{Cli, CliError, Driver, OutputMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.tokens {
        OutputMode::Tokens
    } else {
        OutputMode::Render
    };
    let driver = Driver::new(mode);

    if let Some(file) = cli.file {
        match driver.parse_file(&file) {
            Ok(output) => println!("{}", output),
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(CliError::Syntax(e)) => {
                report_syntax_error(&e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(code) = cli.eval {
        match driver.parse_source(&code) {
            Ok(output) => println!("{}", output),
            Err(CliError::Syntax(e)) => {
                report_syntax_error(&e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if cli.repl {
        js_cli::repl::run_repl(&driver)?;
    } else {
        println!("Kelp JavaScript parser");
        println!();
        println!("Usage:");
        println!("  kelp-js --file <FILE>     Parse a JavaScript file");
        println!("  kelp-js --eval <CODE>     Parse inline JavaScript code");
        println!("  kelp-js --repl            Start interactive REPL");
        println!();
        println!("Run 'kelp-js --help' for more options.");
    }

    Ok(())
}

/// Print a syntax error, prefixed with its `line:column` position when
/// the lexer recorded one.
fn report_syntax_error(error: &core_types::SyntaxError) {
    match error.position {
        Some(pos) => eprintln!("Syntax Error: {}: {}", pos, error),
        None => eprintln!("Syntax Error: {}", error),
    }
}
