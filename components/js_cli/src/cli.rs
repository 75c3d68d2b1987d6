//! Command-line argument definitions.

use clap::Parser as ClapParser;

/// Command-line arguments for the kelp-js binary.
#[derive(Debug, ClapParser)]
#[command(
    name = "kelp-js",
    version,
    about = "Kelp JavaScript parser",
    long_about = "Parses JavaScript source text and prints the AST rendering."
)]
pub struct Cli {
    /// JavaScript file to parse
    #[arg(short, long)]
    pub file: Option<String>,

    /// Inline JavaScript source to parse
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the AST as JSON instead of the rendering
    #[arg(long)]
    pub json: bool,

    /// Print the token stream instead of the AST
    #[arg(long)]
    pub tokens: bool,
}
