//! REPL (Read-Eval-Print Loop) implementation.

use crate::driver::Driver;
use crate::error::{CliError, CliResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL.
///
/// Each completed input line (or multi-line group) is parsed and its
/// AST rendering printed; syntax errors are printed without ending the
/// session.
pub fn run_repl(driver: &Driver) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("failed to initialize editor: {}", e)))?;

    println!("Kelp JavaScript parser");
    println!("Type JavaScript code or 'exit' to quit.");
    println!();

    let mut buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    break;
                }
                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed);
                    continue;
                }

                if in_multiline {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                if is_input_complete(&buffer) {
                    in_multiline = false;
                    let _ = editor.add_history_entry(&buffer);
                    match driver.parse_source(&buffer) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", e),
                    }
                    buffer.clear();
                } else {
                    in_multiline = true;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if in_multiline {
                    println!("^C");
                    buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                return Err(CliError::Repl(format!("readline error: {}", err)));
            }
        }
    }

    Ok(())
}

fn handle_repl_command(command: &str) {
    match command {
        ".help" => {
            println!("REPL commands:");
            println!("  .help     - Show this help message");
            println!("  .clear    - Clear the screen");
            println!("  .exit     - Exit the REPL");
        }
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Check whether the buffered input looks complete: balanced braces,
/// brackets, and parentheses outside of string and template literals.
fn is_input_complete(input: &str) -> bool {
    let mut brace = 0i32;
    let mut bracket = 0i32;
    let mut paren = 0i32;
    let mut in_string = false;
    let mut string_char = ' ';
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }
        if !in_string {
            match c {
                '"' | '\'' | '`' => {
                    in_string = true;
                    string_char = c;
                }
                '{' => brace += 1,
                '}' => brace -= 1,
                '[' => bracket += 1,
                ']' => bracket -= 1,
                '(' => paren += 1,
                ')' => paren -= 1,
                _ => {}
            }
        } else if c == string_char {
            in_string = false;
        }
    }

    brace <= 0 && bracket <= 0 && paren <= 0 && !in_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_complete_simple() {
        assert!(is_input_complete("let x = 42;"));
        assert!(is_input_complete("f(1, 2);"));
    }

    #[test]
    fn test_is_input_complete_open_brace() {
        assert!(!is_input_complete("function test() {"));
        assert!(!is_input_complete("if (true) {"));
    }

    #[test]
    fn test_is_input_complete_balanced_blocks() {
        assert!(is_input_complete("function test() { return 42; }"));
    }

    #[test]
    fn test_is_input_complete_strings() {
        assert!(is_input_complete(r#"let s = "hello {"; "#));
        assert!(!is_input_complete(r#"let s = "unclosed"#));
    }
}
